use proptest::prelude::*;
use voxplate_blocks::{java_string_hash, shorten_key};

// Identifiers carry at most one namespace prefix.
fn block_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,24}",
        "[a-z_]{1,24}".prop_map(|id| format!("minecraft:{}", id)),
        "[a-z_]{1,24}".prop_map(|id| format!("mymod:{}", id)),
    ]
}

proptest! {
    // Normalization is idempotent
    #[test]
    fn shorten_key_idempotent(name in block_name()) {
        let once = shorten_key(&name);
        prop_assert_eq!(shorten_key(once), once);
    }

    // Namespaced and bare spellings of the same id normalize identically
    #[test]
    fn shorten_key_collapses_default_namespace(id in "[a-z_]{1,24}") {
        let namespaced = format!("minecraft:{}", id);
        prop_assert_eq!(shorten_key(&namespaced), id.as_str());
        prop_assert_eq!(shorten_key(&id), id.as_str());
    }

    // Hash is a pure function of the string
    #[test]
    fn hash_deterministic(s in ".{0,64}") {
        prop_assert_eq!(java_string_hash(&s), java_string_hash(&s));
    }

    // Appending one ASCII char follows the 31-multiplier recurrence
    #[test]
    fn hash_recurrence_step(s in "[ -~]{0,32}", c in proptest::char::range(' ', '~')) {
        let mut extended = s.clone();
        extended.push(c);
        let expect = java_string_hash(&s)
            .wrapping_mul(31)
            .wrapping_add(c as i32);
        prop_assert_eq!(java_string_hash(&extended), expect);
    }
}
