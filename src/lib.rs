pub mod config;

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod body;
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store;
                pub mod event_store_in_memory;
            }
        }
    }
    pub mod status {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
