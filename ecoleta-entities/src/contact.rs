/// Contact details of the organization running a collection point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Addresses a single text field of [`Contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

impl Contact {
    #[must_use]
    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut contact = self.clone();
        let value = value.into();
        match field {
            ContactField::Name => contact.name = value,
            ContactField::Email => contact.email = value,
            ContactField::Whatsapp => contact.whatsapp = value,
        }
        contact
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Whatsapp => &self.whatsapp,
        }
    }
}

impl ContactField {
    /// Name of the form input (and of the multipart field).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
        }
    }
}
