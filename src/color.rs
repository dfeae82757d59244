// --- File: color.rs ---
use crate::constants::{COLOR_SCALE_END, COLOR_SCALE_START, LAB_KN};
use glam::{Mat3, Vec3};
use rand::Rng;

// D65 reference white and the CIE Lab breakpoints.
const XN: f32 = 0.950_470;
const YN: f32 = 1.0;
const ZN: f32 = 1.088_830;
const T0: f32 = 4.0 / 29.0;
const T1: f32 = 6.0 / 29.0;
const T2: f32 = 3.0 * T1 * T1;
const T3: f32 = T1 * T1 * T1;

/// An 8-bit sRGB color. Every color operation rounds back to this precision,
/// so a cell's color is always exactly representable as a hex string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::new(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as floats in [0, 1].
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }

    /// Clamps to [0, 1] and rounds to the nearest 8-bit value.
    pub fn from_vec3(v: Vec3) -> Self {
        let c = (v.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        Self::new(c.x as u8, c.y as u8, c.z as u8)
    }

    /// Linear-light RGBA, for upload to an sRGB render target.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        let v = self.to_vec3();
        [
            srgb_to_linear(v.x),
            srgb_to_linear(v.y),
            srgb_to_linear(v.z),
            1.0,
        ]
    }

    /// HSL lightness in [0, 1].
    pub fn lightness(self) -> f32 {
        let v = self.to_vec3();
        (v.max_element() + v.min_element()) / 2.0
    }

    /// Root-mean-square average per channel, which keeps blends of bright
    /// colors from turning muddy. Returns `None` for an empty slice.
    pub fn average(colors: &[Color]) -> Option<Color> {
        if colors.is_empty() {
            return None;
        }
        let sum_sq = colors
            .iter()
            .map(|c| {
                let v = c.to_vec3();
                v * v
            })
            .fold(Vec3::ZERO, |acc, v| acc + v);
        let mean = sum_sq / colors.len() as f32;
        Some(Color::from_vec3(Vec3::new(
            mean.x.sqrt(),
            mean.y.sqrt(),
            mean.z.sqrt(),
        )))
    }

    /// Lowers the CIE Lab lightness by `LAB_KN * amount`.
    pub fn darken(self, amount: f32) -> Color {
        let mut lab = self.to_lab();
        lab.x -= LAB_KN * amount;
        Color::from_lab(lab)
    }

    fn to_lab(self) -> Vec3 {
        let v = self.to_vec3();
        let linear = Vec3::new(srgb_to_linear(v.x), srgb_to_linear(v.y), srgb_to_linear(v.z));
        let xyz = rgb_to_xyz() * linear;
        let fx = xyz_to_lab(xyz.x / XN);
        let fy = xyz_to_lab(xyz.y / YN);
        let fz = xyz_to_lab(xyz.z / ZN);
        Vec3::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    fn from_lab(lab: Vec3) -> Color {
        let fy = (lab.x + 16.0) / 116.0;
        let fx = fy + lab.y / 500.0;
        let fz = fy - lab.z / 200.0;
        let xyz = Vec3::new(
            XN * lab_to_xyz(fx),
            YN * lab_to_xyz(fy),
            ZN * lab_to_xyz(fz),
        );
        let linear = xyz_to_rgb() * xyz;
        Color::from_vec3(Vec3::new(
            linear_to_srgb(linear.x),
            linear_to_srgb(linear.y),
            linear_to_srgb(linear.z),
        ))
    }
}

/// Maps a value in [0, 1] onto a straight line between two colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColorScale {
    pub start: Color,
    pub end: Color,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            start: COLOR_SCALE_START,
            end: COLOR_SCALE_END,
        }
    }
}

impl ColorScale {
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Color::from_vec3(self.start.to_vec3().lerp(self.end.to_vec3(), t as f32))
    }

    pub fn sample_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.sample(rng.gen_range(0.0..1.0))
    }
}

// --- Helper Functions ---

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_04 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn xyz_to_lab(t: f32) -> f32 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

fn lab_to_xyz(t: f32) -> f32 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

fn rgb_to_xyz() -> Mat3 {
    Mat3::from_cols(
        Vec3::new(0.412_456_4, 0.212_672_9, 0.019_333_9),
        Vec3::new(0.357_576_1, 0.715_152_2, 0.119_192_0),
        Vec3::new(0.180_437_5, 0.072_175_0, 0.950_304_1),
    )
}

fn xyz_to_rgb() -> Mat3 {
    Mat3::from_cols(
        Vec3::new(3.240_454_2, -0.969_266_0, 0.055_643_4),
        Vec3::new(-1.537_138_5, 1.876_010_8, -0.204_025_9),
        Vec3::new(-0.498_531_4, 0.041_556_0, 1.057_225_2),
    )
}

// --- End of File: color.rs ---
