pub mod cart {
    pub mod file_storage;
    pub mod record;
}
