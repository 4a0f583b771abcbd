//! Fixed-point types (`_Fract` and `_Accum`).

use crate::config::TargetProfile;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FixedForm {
    /// Pure fraction in `[-1, 1)` or `[0, 1)`.
    Fract,
    /// Fraction with integral bits.
    Accum,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FixedSize {
    Short,
    Normal,
    Long,
}

impl FixedForm {
    pub const ALL: [FixedForm; 2] = [Self::Fract, Self::Accum];
}

impl FixedSize {
    pub const ALL: [FixedSize; 3] = [Self::Short, Self::Normal, Self::Long];
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FixedType {
    pub form: FixedForm,
    pub size: FixedSize,
    pub saturating: bool,
    pub signed: bool,
}

/// Bit split of a fixed-point value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedBits {
    pub sign: u64,
    pub integral: u64,
    pub fraction: u64,
}

impl FixedBits {
    pub fn total(self) -> u64 {
        self.sign + self.integral + self.fraction
    }
}

/// Bytes per profile, indexed by `[profile][form][size]`.
const FIXED_BYTES: [[[u64; 3]; 2]; 2] = [
    [[1, 1, 2], [1, 1, 2]],
    [[1, 2, 4], [2, 4, 8]],
];

impl FixedType {
    pub const FRACT: FixedType = FixedType::new(FixedForm::Fract, FixedSize::Normal, false, true);
    pub const ACCUM: FixedType = FixedType::new(FixedForm::Accum, FixedSize::Normal, false, true);

    pub const fn new(form: FixedForm, size: FixedSize, saturating: bool, signed: bool) -> Self {
        Self {
            form,
            size,
            saturating,
            signed,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.form as usize * 12
            + self.size as usize * 4
            + self.saturating as usize * 2
            + (!self.signed) as usize
    }

    pub fn size_bytes(self, profile: TargetProfile) -> u64 {
        FIXED_BYTES[profile.index()][self.form as usize][self.size as usize]
    }

    pub fn bits(self, profile: TargetProfile) -> FixedBits {
        let total = self.size_bytes(profile) * profile.byte_bits();
        let sign = self.signed as u64;
        match self.form {
            FixedForm::Fract => FixedBits {
                sign,
                integral: 0,
                fraction: total - sign,
            },
            FixedForm::Accum => FixedBits {
                sign,
                integral: total - total / 2 - sign,
                fraction: total / 2,
            },
        }
    }

    /// The non-saturating variant. Primary (non-saturating) types have none.
    pub fn base(self) -> Option<FixedType> {
        self.saturating.then_some(Self {
            saturating: false,
            ..self
        })
    }

    pub fn with_saturation(self, saturating: bool) -> Self {
        Self { saturating, ..self }
    }

    pub fn tag(self) -> String {
        let mut tag = String::new();
        if self.saturating {
            tag.push_str("sat_");
        }
        if !self.signed {
            tag.push('u');
        }
        match self.size {
            FixedSize::Short => tag.push_str("short_"),
            FixedSize::Normal => {}
            FixedSize::Long => tag.push_str("long_"),
        }
        tag.push_str(match self.form {
            FixedForm::Fract => "fract",
            FixedForm::Accum => "accum",
        });
        tag
    }

    pub fn name(self) -> String {
        let mut parts = Vec::with_capacity(4);
        if self.saturating {
            parts.push("_Sat");
        }
        if !self.signed {
            parts.push("unsigned");
        }
        match self.size {
            FixedSize::Short => parts.push("short"),
            FixedSize::Normal => {}
            FixedSize::Long => parts.push("long"),
        }
        parts.push(match self.form {
            FixedForm::Fract => "_Fract",
            FixedForm::Accum => "_Accum",
        });
        parts.join(" ")
    }
}
