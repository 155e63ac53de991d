//! Type definitions for the statement tree.
//!
//! Every named type reduces to one of a few fundamental kinds. The parser
//! registers the known types once, at construction, and only ever looks them
//! up afterwards; literal nodes get the synthetic `int` and `str` types.

/// The primitive category a named type reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum FundamentalType {
    #[default]
    None,
    String,
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Type {
    pub name: String,
    pub fundamental: FundamentalType,
    /// Nested member types. Always empty until aggregate types exist.
    pub fields: Vec<Type>,
}

impl Type {
    pub fn new(name: &str, fundamental: FundamentalType) -> Self {
        Type {
            name: name.to_string(),
            fundamental,
            fields: vec![],
        }
    }

    pub fn void() -> Self {
        Type::new("void", FundamentalType::None)
    }

    pub fn int() -> Self {
        Type::new("int", FundamentalType::Integer)
    }

    pub fn string() -> Self {
        Type::new("str", FundamentalType::String)
    }
}

impl Default for Type {
    fn default() -> Self {
        Type::void()
    }
}
