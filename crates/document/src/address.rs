use serde::Serialize;

/// Address components a document can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Number,
    Street,
    Zip,
}

impl AddressField {
    /// Key used for this field inside `address_parts`.
    pub fn key(&self) -> &'static str {
        match self {
            AddressField::Number => "number",
            AddressField::Street => "street",
            AddressField::Zip => "zip",
        }
    }
}

/// Textual address components. Absent fields are omitted from the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressParts {
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip: Option<String>,
}

impl AddressParts {
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::Number => &mut self.number,
            AddressField::Street => &mut self.street,
            AddressField::Zip => &mut self.zip,
        };
        *slot = Some(value.into());
    }

    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Number => self.number.as_deref(),
            AddressField::Street => self.street.as_deref(),
            AddressField::Zip => self.zip.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.street.is_none() && self.zip.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_set_fields_are_serialized() {
        let mut parts = AddressParts::default();
        assert!(parts.is_empty());

        parts.set(AddressField::Street, "street value");
        parts.set(AddressField::Zip, "postalcode value");

        assert!(!parts.is_empty());
        assert_eq!(parts.get(AddressField::Number), None);
        assert_eq!(
            serde_json::to_value(&parts).unwrap(),
            serde_json::json!({ "street": "street value", "zip": "postalcode value" })
        );
    }
}
