use voxplate_blocks::Orientation;
use voxplate_geom::Vec3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::PosY => Vec3::new(0.0, 1.0, 0.0),
            Face::NegY => Vec3::new(0.0, -1.0, 0.0),
            Face::PosX => Vec3::new(1.0, 0.0, 0.0),
            Face::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Face::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Face::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Compass/vertical tag used for per-direction texture lookup.
    /// North faces -Z, matching the property vocabulary.
    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            Face::PosY => Orientation::Top,
            Face::NegY => Orientation::Bottom,
            Face::PosX => Orientation::East,
            Face::NegX => Orientation::West,
            Face::PosZ => Orientation::South,
            Face::NegZ => Orientation::North,
        }
    }

    /// The four corners of this unit-cube face as (offset, uv) pairs.
    /// Corner order pairs with the `(0,1,2),(2,1,3)` index pattern; quads
    /// wind counter-clockwise seen from outside.
    #[inline]
    pub fn corners(self) -> &'static [([f32; 3], [f32; 2]); 4] {
        &FACE_CORNERS[self.index()]
    }
}

static FACE_CORNERS: [[([f32; 3], [f32; 2]); 4]; 6] = [
    // PosY (top)
    [
        ([0.0, 1.0, 1.0], [1.0, 1.0]),
        ([1.0, 1.0, 1.0], [0.0, 1.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0]),
        ([1.0, 1.0, 0.0], [0.0, 0.0]),
    ],
    // NegY (bottom)
    [
        ([1.0, 0.0, 1.0], [1.0, 0.0]),
        ([0.0, 0.0, 1.0], [0.0, 0.0]),
        ([1.0, 0.0, 0.0], [1.0, 1.0]),
        ([0.0, 0.0, 0.0], [0.0, 1.0]),
    ],
    // PosX (east)
    [
        ([1.0, 1.0, 1.0], [0.0, 1.0]),
        ([1.0, 0.0, 1.0], [0.0, 0.0]),
        ([1.0, 1.0, 0.0], [1.0, 1.0]),
        ([1.0, 0.0, 0.0], [1.0, 0.0]),
    ],
    // NegX (west)
    [
        ([0.0, 1.0, 0.0], [0.0, 1.0]),
        ([0.0, 0.0, 0.0], [0.0, 0.0]),
        ([0.0, 1.0, 1.0], [1.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0]),
    ],
    // PosZ (south)
    [
        ([0.0, 0.0, 1.0], [0.0, 0.0]),
        ([1.0, 0.0, 1.0], [1.0, 0.0]),
        ([0.0, 1.0, 1.0], [0.0, 1.0]),
        ([1.0, 1.0, 1.0], [1.0, 1.0]),
    ],
    // NegZ (north)
    [
        ([1.0, 0.0, 0.0], [0.0, 0.0]),
        ([0.0, 0.0, 0.0], [1.0, 0.0]),
        ([1.0, 1.0, 0.0], [0.0, 1.0]),
        ([0.0, 1.0, 0.0], [1.0, 1.0]),
    ],
];
