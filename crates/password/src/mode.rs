use bitflags::bitflags;

bitflags! {
    /// Character classes used by the random algorithm.
    #[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct ModeMask: u8 {
        /// Include lower-case letters.
        const LOWER_CASE        =        0b00000001;
        /// Include upper-case letters.
        const UPPER_CASE        =        0b00000010;
        /// Include numeric digits.
        const NUMERIC           =        0b00000100;
        /// Include special characters.
        const SPECIAL           =        0b00001000;
        /// Avoid characters that are easily confused
        /// when read, for example `1`, `l`, `I`, `O` and `0`.
        const HUMAN_READABLE    =        0b00010000;
        /// All four character classes.
        const COMPLEX = Self::LOWER_CASE.bits()
            | Self::UPPER_CASE.bits()
            | Self::NUMERIC.bits()
            | Self::SPECIAL.bits();
    }
}

impl ModeMask {
    /// Mask with the given mode added.
    pub fn set_mode(self, mode: ModeMask) -> Self {
        self | mode
    }

    /// Mask with the given mode removed.
    pub fn clear_mode(self, mode: ModeMask) -> Self {
        self & !mode
    }

    /// Mask with the given mode flipped.
    pub fn toggle_mode(self, mode: ModeMask) -> Self {
        self ^ mode
    }

    /// Determine if any bit of the given mode is set.
    pub fn has_mode(self, mode: ModeMask) -> bool {
        self.intersects(mode)
    }

    /// Parse a mode string.
    ///
    /// Starts from an empty mask and reads one character at a time.
    /// Upper-case letters enable and lower-case letters disable a mode:
    ///
    /// * `L` / `l` lower-case letters
    /// * `U` / `u` upper-case letters
    /// * `N` / `n` numeric digits
    /// * `S` / `s` special characters
    /// * `H` / `h` human readable
    /// * `C` / `c` all four character classes at once
    ///
    /// Unknown characters are ignored.
    pub fn from_mode_string(value: &str) -> Self {
        value.chars().fold(ModeMask::empty(), |mask, c| match c {
            'C' => mask.set_mode(ModeMask::COMPLEX),
            'c' => mask.clear_mode(ModeMask::COMPLEX),
            'H' => mask.set_mode(ModeMask::HUMAN_READABLE),
            'h' => mask.clear_mode(ModeMask::HUMAN_READABLE),
            'L' => mask.set_mode(ModeMask::LOWER_CASE),
            'l' => mask.clear_mode(ModeMask::LOWER_CASE),
            'N' => mask.set_mode(ModeMask::NUMERIC),
            'n' => mask.clear_mode(ModeMask::NUMERIC),
            'S' => mask.set_mode(ModeMask::SPECIAL),
            's' => mask.clear_mode(ModeMask::SPECIAL),
            'U' => mask.set_mode(ModeMask::UPPER_CASE),
            'u' => mask.clear_mode(ModeMask::UPPER_CASE),
            _ => mask,
        })
    }

    /// Human readable names of the modes in this mask.
    pub fn describe(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(ModeMask::LOWER_CASE) {
            names.push("Lower-case");
        }
        if self.contains(ModeMask::UPPER_CASE) {
            names.push("Upper-case");
        }
        if self.contains(ModeMask::NUMERIC) {
            names.push("Numeric");
        }
        if self.contains(ModeMask::SPECIAL) {
            names.push("Special");
        }
        if self.contains(ModeMask::HUMAN_READABLE) {
            names.push("Human-readable");
        }
        names
    }
}
