pub mod mock_contact_repository;
pub mod mock_contacts_client;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_contacts_client::MockContactsClient;
