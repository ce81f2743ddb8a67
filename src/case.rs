//! Case conversion for column names: declared field names are PascalCase, columns are lowerCamelCase.

/// Lower-case the first character of a declared field name, leaving the rest untouched.
/// e.g. "CoverPhotoPath" -> "coverPhotoPath", "Id" -> "id"
pub fn to_lower_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::to_lower_camel_case;

    #[test]
    fn lowers_only_the_first_character() {
        assert_eq!(to_lower_camel_case("CoverPhotoPath"), "coverPhotoPath");
        assert_eq!(to_lower_camel_case("OwnerUserId"), "ownerUserId");
        assert_eq!(to_lower_camel_case("Id"), "id");
        assert_eq!(to_lower_camel_case("CoverPhotoURL"), "coverPhotoURL");
    }

    #[test]
    fn leaves_already_lower_names_alone() {
        assert_eq!(to_lower_camel_case("email"), "email");
        assert_eq!(to_lower_camel_case(""), "");
    }
}
