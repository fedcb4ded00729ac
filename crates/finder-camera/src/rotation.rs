/// One of the four right-angle image rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Map a rotation in degrees. Anything but 0, 90, 180 or 270 becomes `Deg0`.
    pub fn from_degrees(degrees: i32) -> Self {
        Self::try_from_degrees(degrees).unwrap_or(Rotation::Deg0)
    }

    pub fn try_from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Map a display surface rotation code (0..=3, quarter turns).
    pub fn from_surface_code(code: i32) -> Option<Self> {
        Self::ALL.get(usize::try_from(code).ok()?).copied()
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Quarter-turn code, the inverse of `from_surface_code`.
    pub fn code(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// The next rotation clockwise.
    pub fn next(self) -> Self {
        Self::ALL[(self.code() as usize + 1) % 4]
    }
}
