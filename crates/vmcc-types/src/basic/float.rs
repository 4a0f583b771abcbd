//! Floating-point types: real, complex and imaginary.

use crate::config::TargetProfile;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FloatForm {
    Real,
    Complex,
    Imaginary,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FloatSize {
    Float,
    Double,
    LongDouble,
}

impl FloatForm {
    pub const ALL: [FloatForm; 3] = [Self::Real, Self::Complex, Self::Imaginary];
}

impl FloatSize {
    pub const ALL: [FloatSize; 3] = [Self::Float, Self::Double, Self::LongDouble];
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FloatType {
    pub form: FloatForm,
    pub size: FloatSize,
}

/// Bytes of the real part per profile, indexed by `[profile][size]`.
const FLOAT_BYTES: [[u64; 3]; 2] = [[1, 2, 2], [4, 8, 8]];

impl FloatType {
    pub const FLOAT: FloatType = FloatType::new(FloatForm::Real, FloatSize::Float);
    pub const DOUBLE: FloatType = FloatType::new(FloatForm::Real, FloatSize::Double);
    pub const LONG_DOUBLE: FloatType = FloatType::new(FloatForm::Real, FloatSize::LongDouble);

    pub const fn new(form: FloatForm, size: FloatSize) -> Self {
        Self { form, size }
    }

    pub(crate) const fn index(self) -> usize {
        self.form as usize * 3 + self.size as usize
    }

    pub fn size_bytes(self, profile: TargetProfile) -> u64 {
        let real = FLOAT_BYTES[profile.index()][self.size as usize];
        match self.form {
            FloatForm::Complex => real * 2,
            FloatForm::Real | FloatForm::Imaginary => real,
        }
    }

    /// Alignment follows the real part.
    pub fn align(self, profile: TargetProfile) -> u64 {
        profile.scalar_align(FLOAT_BYTES[profile.index()][self.size as usize])
    }

    /// Real type of the same size, for complex and imaginary types.
    pub fn base(self) -> Option<FloatType> {
        (self.form != FloatForm::Real).then_some(Self::new(FloatForm::Real, self.size))
    }

    pub fn tag(self) -> String {
        let prefix = match self.form {
            FloatForm::Real => "",
            FloatForm::Complex => "c",
            FloatForm::Imaginary => "i",
        };
        let size = match self.size {
            FloatSize::Float => "float",
            FloatSize::Double => "double",
            FloatSize::LongDouble => "ldouble",
        };
        format!("{prefix}{size}")
    }

    pub fn name(self) -> String {
        let size = match self.size {
            FloatSize::Float => "float",
            FloatSize::Double => "double",
            FloatSize::LongDouble => "long double",
        };
        match self.form {
            FloatForm::Real => size.to_owned(),
            FloatForm::Complex => format!("_Complex {size}"),
            FloatForm::Imaginary => format!("_Imaginary {size}"),
        }
    }
}
