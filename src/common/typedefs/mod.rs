pub mod bs64_string;
pub mod serializable_pubkey;
