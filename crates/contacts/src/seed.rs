//! Sample contacts for an empty store.

use contacts_core::{Contact, ContactService, Result};
use tracing::info;

fn sample(fields: [&str; 11]) -> Contact {
    let [firstname, lastname, gender, email, phone, address, city, state, country, pincode, picture] =
        fields;
    let field = |value: &str| Some(value.to_string());
    Contact {
        id: String::new(),
        firstname: field(firstname),
        lastname: field(lastname),
        gender: field(gender),
        email: field(email),
        phone: field(phone),
        address: field(address),
        city: field(city),
        state: field(state),
        country: field(country),
        pincode: field(pincode),
        picture: field(picture),
    }
}

/// The three contacts a fresh installation starts with.
#[must_use]
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        sample([
            "John",
            "Doe",
            "Male",
            "john.doe@example.com",
            "555-123-4567",
            "123 Main St",
            "New York",
            "NY",
            "USA",
            "10001",
            "https://randomuser.me/api/portraits/men/1.jpg",
        ]),
        sample([
            "Jane",
            "Smith",
            "Female",
            "jane.smith@example.com",
            "555-987-6543",
            "456 Oak Ave",
            "San Francisco",
            "CA",
            "USA",
            "94107",
            "https://randomuser.me/api/portraits/women/2.jpg",
        ]),
        sample([
            "Robert",
            "Johnson",
            "Male",
            "robert.johnson@example.com",
            "555-567-8901",
            "789 Pine St",
            "Chicago",
            "IL",
            "USA",
            "60601",
            "https://randomuser.me/api/portraits/men/3.jpg",
        ]),
    ]
}

/// Insert the sample contacts if the store holds none.
///
/// Returns how many contacts were inserted.
///
/// # Errors
///
/// Returns error if the store fails
pub async fn seed_sample_data(service: &ContactService) -> Result<usize> {
    if service.count().await? > 0 {
        info!("Store already has contacts, skipping sample data");
        return Ok(0);
    }

    let samples = sample_contacts();
    let inserted = samples.len();
    for contact in samples {
        service.create(contact).await?;
    }
    info!(inserted, "Loaded sample contacts");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use contacts_core::MemoryContactStore;

    use super::*;

    fn service() -> ContactService {
        ContactService::new(Arc::new(MemoryContactStore::new()))
    }

    #[tokio::test]
    async fn test_seeds_empty_store() -> Result<()> {
        let service = service();
        assert_eq!(seed_sample_data(&service).await?, 3);

        let page = service.list(1, 10).await?;
        let names: Vec<_> = page
            .content
            .iter()
            .filter_map(|c| c.firstname.as_deref())
            .collect();
        assert_eq!(names, ["John", "Jane", "Robert"]);
        assert!(page.content.iter().all(|c| !c.has_blank_id()));
        Ok(())
    }

    #[tokio::test]
    async fn test_skips_populated_store() -> Result<()> {
        let service = service();
        service.create(Contact::with_id("existing")).await?;

        assert_eq!(seed_sample_data(&service).await?, 0);
        assert_eq!(service.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_seeding_twice_is_a_no_op() -> Result<()> {
        let service = service();
        seed_sample_data(&service).await?;
        seed_sample_data(&service).await?;
        assert_eq!(service.count().await?, 3);
        Ok(())
    }
}
