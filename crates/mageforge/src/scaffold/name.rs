//! Identifier parsing and validation
//!
//! All scaffold inputs are validated up front so generation never emits a
//! file with a malformed name baked in. Patterns are anchored: the whole
//! input must match, not just some substring.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

fn is_camel_piece(piece: &str) -> bool {
    let mut chars = piece.chars();
    matches!(chars.next(), Some('A'..='Z')) && chars.all(|c| c.is_ascii_alphanumeric())
}

fn is_snake_piece(piece: &str) -> bool {
    let mut chars = piece.chars();
    matches!(chars.next(), Some('a'..='z'))
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Module name of the form `Vendor_Module`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleName {
    vendor: String,
    module: String,
}

impl ModuleName {
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    /// PHP namespace root, `Vendor\Module`.
    pub fn namespace(&self) -> String {
        format!("{}\\{}", self.vendor, self.module)
    }
}

impl FromStr for ModuleName {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let Some((vendor, module)) = input.split_once('_') else {
            return Err(Error::validation(format!(
                "invalid module name `{input}`, expected the Vendor_Module form"
            )));
        };
        if !is_camel_piece(vendor) || !is_camel_piece(module) {
            return Err(Error::validation(format!(
                "invalid module name `{input}`, both pieces must be UpperCamelCase"
            )));
        }
        Ok(Self {
            vendor: vendor.to_string(),
            module: module.to_string(),
        })
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.vendor, self.module)
    }
}

/// Backslash-separated PHP type path, e.g. `Menu\Item`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypePath {
    segments: Vec<String>,
}

impl TypePath {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, the short type name.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Segments before the leaf, for namespace construction.
    pub fn prefix(&self) -> &[String] {
        let end = self.segments.len().saturating_sub(1);
        self.segments.get(..end).unwrap_or_default()
    }

    /// Relative file path without extension, `Menu/Item`.
    pub fn file_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Lowercased underscore key, `menu_item`.
    pub fn key(&self) -> String {
        self.segments.join("_").to_lowercase()
    }

    /// Segments joined by spaces, used for page titles.
    pub fn title(&self) -> String {
        self.segments.join(" ")
    }
}

impl FromStr for TypePath {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let segments: Vec<&str> = input.split('\\').collect();
        if segments.is_empty() || segments.iter().any(|piece| !is_camel_piece(piece)) {
            return Err(Error::validation(format!(
                "invalid type path `{input}`, expected UpperCamelCase segments separated by backslashes"
            )));
        }
        Ok(Self {
            segments: segments.iter().map(|piece| piece.to_string()).collect(),
        })
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("\\"))
    }
}

/// Composer package name, `vendor/package`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageName {
    vendor: String,
    package: String,
}

impl FromStr for PackageName {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid =
            || Error::validation(format!("invalid composer package name `{input}`"));
        let Some((vendor, package)) = input.split_once('/') else {
            return Err(invalid());
        };
        if vendor.is_empty() || !vendor.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(invalid());
        }
        let valid_package = package
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
            && package.starts_with(|c: char| c.is_ascii_lowercase())
            && package.ends_with(|c: char| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !valid_package {
            return Err(invalid());
        }
        Ok(Self {
            vendor: vendor.to_string(),
            package: package.to_string(),
        })
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.package)
    }
}

/// snake_case data field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldName(String);

impl FieldName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UpperCamelCase accessor suffix, `menu_item` becomes `MenuItem`.
    pub fn camel(&self) -> String {
        self.0
            .split('_')
            .map(|piece| {
                let mut chars = piece.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }

    /// lowerCamelCase parameter name.
    pub fn param(&self) -> String {
        let camel = self.camel();
        let mut chars = camel.chars();
        match chars.next() {
            Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let valid = !input.is_empty() && input.split('_').all(is_snake_piece);
        if !valid {
            return Err(Error::validation(format!(
                "invalid field name `{input}`, expected snake_case"
            )));
        }
        Ok(Self(input.to_string()))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dotted digit-group version, e.g. `1.0.0`.
pub fn validate_version(version: &str) -> Result<()> {
    let valid = !version.is_empty()
        && version
            .split('.')
            .all(|group| !group.is_empty() && group.chars().all(|c| c.is_ascii_digit()));
    if !valid {
        return Err(Error::validation(format!("invalid version `{version}`")));
    }
    Ok(())
}

/// Lowercase identifier used for tables, route ids and similar keys.
pub fn validate_key(kind: &str, input: &str) -> Result<()> {
    let valid = !input.is_empty() && input.split('_').all(is_snake_piece);
    if !valid {
        return Err(Error::validation(format!("invalid {kind} `{input}`")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_round_trip() -> Result<()> {
        let name: ModuleName = "Acme_Sales".parse()?;
        assert_eq!(name.vendor(), "Acme");
        assert_eq!(name.module(), "Sales");
        assert_eq!(name.namespace(), "Acme\\Sales");
        assert_eq!(name.to_string(), "Acme_Sales");
        Ok(())
    }

    #[test]
    fn test_module_name_rejects_junk() {
        assert!("acme_sales".parse::<ModuleName>().is_err());
        assert!("AcmeSales".parse::<ModuleName>().is_err());
        assert!("Acme_Sales_Extra".parse::<ModuleName>().is_err());
        assert!("Acme_".parse::<ModuleName>().is_err());
    }

    #[test]
    fn test_type_path_derivations() -> Result<()> {
        let path: TypePath = "Menu\\Item".parse()?;
        assert_eq!(path.leaf(), "Item");
        assert_eq!(path.prefix(), ["Menu".to_string()]);
        assert_eq!(path.key(), "menu_item");
        assert_eq!(path.file_path(), PathBuf::from("Menu/Item"));
        assert_eq!(path.title(), "Menu Item");
        Ok(())
    }

    #[test]
    fn test_type_path_rejects_lowercase_segment() {
        assert!("Menu\\item".parse::<TypePath>().is_err());
        assert!("".parse::<TypePath>().is_err());
    }

    #[test]
    fn test_package_name() {
        assert!("acme/sample-module".parse::<PackageName>().is_ok());
        assert!("Acme/sample".parse::<PackageName>().is_err());
        assert!("acme/sample-".parse::<PackageName>().is_err());
        assert!("acme".parse::<PackageName>().is_err());
    }

    #[test]
    fn test_field_name_casing() -> Result<()> {
        let field: FieldName = "menu_item_id".parse()?;
        assert_eq!(field.camel(), "MenuItemId");
        assert_eq!(field.param(), "menuItemId");
        Ok(())
    }

    #[test]
    fn test_field_name_rejects_junk() {
        assert!("MenuItem".parse::<FieldName>().is_err());
        assert!("_leading".parse::<FieldName>().is_err());
        assert!("2fast".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("1.0.0").is_ok());
        assert!(validate_version("10").is_ok());
        assert!(validate_version("1..0").is_err());
        assert!(validate_version("1.0-beta").is_err());
    }
}
