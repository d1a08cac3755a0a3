/// Golden ratio: (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Inverse golden ratio: 1/φ = φ - 1
pub const PHI_INVERSE: f64 = 0.618_033_988_749_894_9;

/// φ² = φ + 1
pub const PHI_SQUARED: f64 = 2.618_033_988_749_895;

/// φ⁻¹
pub const PHI_NEG1: f64 = PHI_INVERSE;

/// φ⁻² = 2 - φ
pub const PHI_NEG2: f64 = 0.381_966_011_250_105_1;

/// φ⁻³ = √5 - 2
pub const PHI_NEG3: f64 = 0.236_067_977_499_789_8;

/// φ⁻⁴ = (7 - 3√5) / 2
pub const PHI_NEG4: f64 = 0.145_898_033_750_315_3;

pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub const SQRT_5: f64 = 2.236_067_977_499_79;

pub const PI: f64 = std::f64::consts::PI;

/// τ = 2π
pub const TAU: f64 = std::f64::consts::TAU;

/// Euler's number
pub const E: f64 = std::f64::consts::E;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;
