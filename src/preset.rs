pub mod rules {
    use crate::pieces::Side::A;
    use crate::Ruleset;

    /// The default rules: anchored pieces travel up to three cells, and a piece may travel in
    /// any direction.
    pub const STANDARD: Ruleset = Ruleset {
        anchored_range: 3,
        directional_stones: false,
        starting_side: A,
    };

    /// As [`STANDARD`], but a piece needs one of the mover's stones on the side of its
    /// perimeter facing the direction of travel.
    pub const DIRECTIONAL: Ruleset = Ruleset {
        directional_stones: true,
        ..STANDARD
    };
}

pub mod boards {
    /// The home rows of each side, with the rest of the board empty.
    pub const STANDARD: &str = "
        ....................
        ..o.o.oooooooo.o.o..
        .ooo.o.oooo.o.o.ooo.
        ..o.o.oooooooo.o.o..
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ..x.x.xxxxxxxx.x.x..
        .xxx.x.xxxx.x.x.xxx.
        ..x.x.xxxxxxxx.x.x..
        ....................
    ";

    /// The home rows plus a line of six forward stones for each side, three rows in front of
    /// its home rows.
    pub const FORWARD_STONES: &str = "
        ....................
        ..o.o.oooooooo.o.o..
        .ooo.o.oooo.o.o.ooo.
        ..o.o.oooooooo.o.o..
        ....................
        ....................
        ..o..o..o..o..o..o..
        ....................
        ....................
        ....................
        ....................
        ....................
        ....................
        ..x..x..x..x..x..x..
        ....................
        ....................
        ..x.x.xxxxxxxx.x.x..
        .xxx.x.xxxx.x.x.xxx.
        ..x.x.xxxxxxxx.x.x..
        ....................
    ";
}
