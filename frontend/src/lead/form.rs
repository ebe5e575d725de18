use super::channel::LeadError;

/// Interests offered in the lead form.
pub const INTERESTS: [&str; 5] = [
    "General Inquiry",
    "Product Engineering",
    "SaaS Development",
    "Integrations",
    "Security & Compliance",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Company,
    Interest,
    Message,
}

impl LeadField {
    /// Maps an input's `name` attribute to a field.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "fname" | "name" => LeadField::FirstName,
            "lname" => LeadField::LastName,
            "email" => LeadField::Email,
            "company" => LeadField::Company,
            "usecase" | "subject" => LeadField::Interest,
            "message" => LeadField::Message,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub interest: String,
    pub message: Option<String>,
}

impl LeadForm {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::FirstName => self.first_name = value,
            LeadField::LastName => self.last_name = value,
            LeadField::Email => self.email = value,
            LeadField::Company => self.company = value,
            LeadField::Interest => self.interest = value,
            LeadField::Message => {
                self.message = if value.is_empty() { None } else { Some(value) }
            }
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::Interest => &self.interest,
            LeadField::Message => self.message.as_deref().unwrap_or(""),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// The same fields the form marks `required`.
    pub fn check_required(&self) -> Result<(), LeadError> {
        if self.full_name().is_empty() {
            return Err(LeadError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(LeadError::MissingField("email"));
        }
        Ok(())
    }

    pub fn draft(&self, to: &str) -> EmailDraft {
        let name = self.full_name();
        let from = if self.company.trim().is_empty() {
            name.as_str()
        } else {
            self.company.trim()
        };
        let greeting_name = match self.first_name.split_whitespace().next() {
            Some(first) => first.to_string(),
            None => name.clone(),
        };
        let interest = match self.interest.trim() {
            "" => INTERESTS[0],
            chosen => chosen,
        };

        let mut body = format!(
            "Hello AXOBITS Team,\n\n\
             I would like to request a conversation.\n\n\
             Details:\n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Interest: {}\n",
            name,
            self.email.trim(),
            self.company.trim(),
            interest,
        );
        if let Some(message) = self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            body.push_str(&format!("\nMessage:\n{}\n", message.trim()));
        }
        body.push_str(&format!(
            "\nPlease contact me to schedule a time.\n\nBest,\n{}",
            greeting_name
        ));

        EmailDraft {
            to: to.to_string(),
            subject: format!("Conversation request from {}", from),
            body,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jane() -> LeadForm {
        LeadForm {
            first_name: "Jane Doe".to_string(),
            email: "jane@co.com".to_string(),
            company: "Acme".to_string(),
            interest: "Integrations".to_string(),
            ..LeadForm::default()
        }
    }

    fn decoded_query(url: &str, key: &str) -> String {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let value = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
            .unwrap_or_default();
        urlencoding::decode(value).unwrap().into_owned()
    }

    #[test]
    fn test_mailto_contains_every_detail() {
        let url = jane().draft("hello@axobits.com").mailto_url();
        assert!(url.starts_with("mailto:hello@axobits.com?subject="));

        let body = decoded_query(&url, "body");
        for expected in ["Jane Doe", "jane@co.com", "Acme", "Integrations"] {
            assert!(body.contains(expected), "body is missing {expected}: {body}");
        }
        assert!(body.ends_with("Best,\nJane"));
        assert_eq!(
            decoded_query(&url, "subject"),
            "Conversation request from Acme"
        );
    }

    #[test]
    fn test_body_is_escaped() {
        let url = jane().draft("hello@axobits.com").mailto_url();
        let (_, query) = url.split_once('?').unwrap();
        assert!(!query.contains('\n'));
        assert!(!query.contains(' '));
    }

    #[test]
    fn test_split_name_and_message() {
        let mut form = LeadForm::default();
        form.set(LeadField::from_name("fname").unwrap(), "Ada".to_string());
        form.set(LeadField::from_name("lname").unwrap(), "Lovelace".to_string());
        form.set(LeadField::Email, "ada@engine.io".to_string());
        form.set(LeadField::Message, "Need a \"ledger\" & more".to_string());

        let draft = form.draft("hello@axobits.com");
        assert_eq!(draft.subject, "Conversation request from Ada Lovelace");
        assert!(draft.body.contains("Name: Ada Lovelace\n"));
        assert!(draft.body.contains("Interest: General Inquiry\n"));
        assert!(draft.body.contains("Message:\nNeed a \"ledger\" & more\n"));
        assert_eq!(
            decoded_query(&draft.mailto_url(), "body"),
            draft.body
        );
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            LeadForm::default().check_required(),
            Err(LeadError::MissingField("name"))
        );
        let mut form = jane();
        form.email.clear();
        assert_eq!(form.check_required(), Err(LeadError::MissingField("email")));
        assert_eq!(jane().check_required(), Ok(()));
    }

    #[test]
    fn test_empty_message_is_none() {
        let mut form = jane();
        form.set(LeadField::Message, String::new());
        assert_eq!(form.message, None);
        assert!(!form.is_empty());
        assert!(LeadForm::default().is_empty());
    }
}
