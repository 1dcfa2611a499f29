use super::Type;

/// An enumeration whose values are stored as their discriminant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TypeEnum {
    /// Rust name of the enum, used in error messages.
    pub name: String,

    pub variants: Vec<EnumVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    pub name: String,

    /// Enum discriminant, the stored integer
    pub discriminant: i64,
}

impl TypeEnum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: vec![],
        }
    }

    /// Adds a variant with an explicit discriminant.
    pub fn variant(mut self, name: impl Into<String>, discriminant: i64) -> Self {
        self.variants.push(EnumVariant {
            name: name.into(),
            discriminant,
        });
        self
    }

    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
