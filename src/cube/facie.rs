use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

use Color::*;

/// Faces showing on each slot, in the order its stickers are listed.
///
/// Going through the list walks clockwise around the corner, starting from the U
/// or D sticker.
const SLOT_FACES: [[Face; 3]; SLOTS] = {
    use Face::*;
    [
        [Up, Left, Back],
        [Up, Back, Right],
        [Up, Right, Front],
        [Up, Front, Left],
        [Down, Left, Front],
        [Down, Front, Right],
        [Down, Right, Back],
        [Down, Back, Left],
    ]
};

/// Colours of each cubie as seen from its home slot, in `SLOT_FACES` order.
const CUBIE_COLORS: [[Color; 3]; SLOTS] = [
    [White, Green, Orange],
    [White, Orange, Blue],
    [White, Blue, Red],
    [White, Red, Green],
    [Yellow, Green, Red],
    [Yellow, Red, Blue],
    [Yellow, Blue, Orange],
    [Yellow, Orange, Green],
];

pub type Stickers = [[Color; 3]; SLOTS];

impl Color {
    pub fn letter(self) -> char {
        match self {
            White => 'W',
            Green => 'G',
            Red => 'R',
            Blue => 'B',
            Orange => 'O',
            Yellow => 'Y',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        let color = match c.to_ascii_uppercase() {
            'W' => White,
            'G' => Green,
            'R' => Red,
            'B' => Blue,
            'O' => Orange,
            'Y' => Yellow,
            _ => return None,
        };
        Some(color)
    }
}

impl From<Face> for Color {
    fn from(face: Face) -> Color {
        match face {
            Face::Up => White,
            Face::Left => Green,
            Face::Front => Red,
            Face::Right => Blue,
            Face::Back => Orange,
            Face::Down => Yellow,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Cube {
    pub fn stickers(&self) -> Stickers {
        let mut stickers = [[White; 3]; SLOTS];
        for (slot, triple) in stickers.iter_mut().enumerate() {
            let colors = CUBIE_COLORS[self.position()[slot] as usize];
            let twist = self.orientation()[slot] as usize;
            for (i, sticker) in triple.iter_mut().enumerate() {
                *sticker = colors[(twist + i) % 3];
            }
        }
        stickers
    }

    pub fn sticker(&self, slot: u8, face: Face) -> Option<Color> {
        let i = SLOT_FACES[slot as usize].iter().position(|&f| f == face)?;
        Some(self.stickers()[slot as usize][i])
    }

    /// Rebuilds a cube from the colours on each slot, listed in the slot's face order.
    pub fn from_stickers(stickers: &Stickers) -> Result<Cube, InvalidConfiguration> {
        let mut position = [0; SLOTS];
        let mut orientation = [0; SLOTS];
        let mut seen = [None; SLOTS];

        for (slot, triple) in stickers.iter().enumerate() {
            let (cubie, twist) =
                identify(triple).ok_or(InvalidConfiguration::NotACorner { slot, colors: *triple })?;
            if let Some(first) = seen[cubie as usize].replace(slot) {
                return Err(InvalidConfiguration::DuplicateCubie {
                    first,
                    second: slot,
                });
            }
            position[slot] = cubie;
            orientation[slot] = twist;
        }

        let cube = Cube::from_parts(position, orientation);
        match cube.twist_parity() {
            0 => Ok(cube),
            parity => Err(InvalidConfiguration::Twisted { parity }),
        }
    }
}

fn identify(triple: &[Color; 3]) -> Option<(u8, u8)> {
    CUBIE_COLORS.iter().enumerate().find_map(|(cubie, colors)| {
        (0..3)
            .find(|&twist| (0..3).all(|i| triple[i] == colors[(twist + i) % 3]))
            .map(|twist| (cubie as u8, twist as u8))
    })
}

/// Reads 24 colour letters, three per slot in slot order. Whitespace is ignored.
pub fn parse_stickers(s: &str) -> Result<Stickers, InvalidConfiguration> {
    let colors = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Color::from_letter(c).ok_or(InvalidConfiguration::UnknownColor(c)))
        .collect::<Result<Vec<_>, _>>()?;
    if colors.len() != SLOTS * 3 {
        return Err(InvalidConfiguration::StickerCount(colors.len()));
    }

    let mut stickers = [[White; 3]; SLOTS];
    for (triple, chunk) in stickers.iter_mut().zip(colors.chunks(3)) {
        triple.copy_from_slice(chunk);
    }
    Ok(stickers)
}

pub fn format_stickers(stickers: &Stickers) -> String {
    stickers
        .iter()
        .map(|t| t.iter().map(|c| c.letter()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = |slot: u8, face: Face| match self.sticker(slot, face) {
            Some(c) => c.letter(),
            None => '?',
        };
        use Face::*;

        writeln!(f, "   {}{}", s(ULB, Up), s(URB, Up))?;
        writeln!(f, "   {}{}", s(ULF, Up), s(URF, Up))?;
        writeln!(
            f,
            "{}{} {}{} {}{} {}{}",
            s(ULB, Left),
            s(ULF, Left),
            s(ULF, Front),
            s(URF, Front),
            s(URF, Right),
            s(URB, Right),
            s(URB, Back),
            s(ULB, Back),
        )?;
        writeln!(
            f,
            "{}{} {}{} {}{} {}{}",
            s(DLB, Left),
            s(DLF, Left),
            s(DLF, Front),
            s(DRF, Front),
            s(DRF, Right),
            s(DRB, Right),
            s(DRB, Back),
            s(DLB, Back),
        )?;
        writeln!(f, "   {}{}", s(DLF, Down), s(DRF, Down))?;
        write!(f, "   {}{}", s(DLB, Down), s(DRB, Down))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_shows_face_colors() {
        let cube = Cube::solved();
        for slot in 0..SLOTS as u8 {
            for face in SLOT_FACES[slot as usize] {
                assert_eq!(cube.sticker(slot, face), Some(Color::from(face)));
            }
        }
    }

    #[test]
    fn solved_stickers_load_as_identity() {
        let cube = Cube::from_stickers(&Cube::solved().stickers()).unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn right_turn_brings_front_up() {
        let cube = cube_with_moves("R");
        assert_eq!(cube.sticker(URF, Face::Up), Some(Red));
        assert_eq!(cube.sticker(URF, Face::Right), Some(Blue));
        assert_eq!(cube.sticker(URF, Face::Front), Some(Yellow));
    }

    #[quickcheck]
    fn stickers_round_trip(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves);
        Cube::from_stickers(&cube.stickers()) == Ok(cube)
    }

    #[test]
    fn single_twisted_corner_is_rejected() {
        let mut stickers = Cube::solved().stickers();
        stickers[ULB as usize].rotate_left(1);
        assert_eq!(
            Cube::from_stickers(&stickers),
            Err(InvalidConfiguration::Twisted { parity: 1 })
        );
    }

    #[test]
    fn two_opposite_twists_are_accepted() {
        let mut stickers = Cube::solved().stickers();
        stickers[ULB as usize].rotate_left(1);
        stickers[DRF as usize].rotate_right(1);
        let cube = Cube::from_stickers(&stickers).unwrap();
        assert_eq!(cube.misoriented(), 2);
        assert_eq!(cube.misplaced(), 0);
    }

    #[test]
    fn mirrored_corner_is_rejected() {
        let mut stickers = Cube::solved().stickers();
        stickers[URF as usize].swap(1, 2);
        assert!(matches!(
            Cube::from_stickers(&stickers),
            Err(InvalidConfiguration::NotACorner { slot: 2, .. })
        ));
    }

    #[test]
    fn duplicate_cubie_is_rejected() {
        let mut stickers = Cube::solved().stickers();
        stickers[URB as usize] = stickers[ULB as usize];
        assert_eq!(
            Cube::from_stickers(&stickers),
            Err(InvalidConfiguration::DuplicateCubie { first: 0, second: 1 })
        );
    }

    #[test]
    fn parse_and_format() {
        let text = format_stickers(&cube_with_moves("F U'").stickers());
        let stickers = parse_stickers(&text).unwrap();
        assert_eq!(Cube::from_stickers(&stickers), Ok(cube_with_moves("F U'")));
        assert_eq!(parse_stickers("WGO"), Err(InvalidConfiguration::StickerCount(3)));
        assert_eq!(parse_stickers("X"), Err(InvalidConfiguration::UnknownColor('X')));
    }

    #[test]
    fn display_solved_net() {
        let net = Cube::solved().to_string();
        assert_eq!(net, "   WW\n   WW\nGG RR BB OO\nGG RR BB OO\n   YY\n   YY");
    }
}
