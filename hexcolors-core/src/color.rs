use std::fmt;

/// Color with four normalized channels, each in `[0, 1]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Color from 8-bit channels, each divided by 255.
    pub fn from_rgba8(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels.map(|c| f64::from(c) / 255.0);
        Rgba::new(r, g, b, a)
    }

    /// Channels scaled back to 8 bits, rounded to nearest.
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.into_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn is_opaque(&self) -> bool {
        self.to_rgba8()[3] == 255
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            let [r, g, b, _] = self.to_rgba8();
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            self.to_hex_with_alpha()
        }
    }

    pub fn to_hex_with_alpha(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    pub fn into_tuple(self) -> (f64, f64, f64, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    pub fn into_array(self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn into_f32_array(self) -> [f32; 4] {
        self.into_array().map(|c| c as f32)
    }
}

impl From<Rgba> for (f64, f64, f64, f64) {
    fn from(color: Rgba) -> Self {
        color.into_tuple()
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(color: Rgba) -> Self {
        color.into_array()
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(color: Rgba) -> Self {
        color.into_f32_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_round_trip() {
        let c = Rgba::from_rgba8([222, 49, 99, 250]);
        assert_eq!(c.red, 222.0 / 255.0);
        assert_eq!(c.to_rgba8(), [222, 49, 99, 250]);
    }

    #[test]
    fn hex_output() {
        assert_eq!(Rgba::new(1.0, 0.0, 0.0, 1.0).to_hex(), "#FF0000");
        assert_eq!(Rgba::new(1.0, 0.0, 0.0, 0.0).to_hex(), "#FF000000");
        assert_eq!(
            Rgba::new(1.0, 1.0, 1.0, 1.0).to_hex_with_alpha(),
            "#FFFFFFFF"
        );
    }

    #[test]
    fn conversions() {
        let c = Rgba::new(0.0, 0.5, 1.0, 1.0);
        let t: (f64, f64, f64, f64) = c.into();
        assert_eq!(t, (0.0, 0.5, 1.0, 1.0));
        let a: [f32; 4] = c.into();
        assert_eq!(a, [0.0, 0.5, 1.0, 1.0]);
        assert_eq!(c.to_string(), "rgba(0, 0.5, 1, 1)");
    }
}
