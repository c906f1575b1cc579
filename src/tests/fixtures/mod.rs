pub mod commands {
    pub mod create_event;
}
