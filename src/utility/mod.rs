pub mod dns_client;
