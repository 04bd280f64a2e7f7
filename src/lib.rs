pub mod config;

pub mod modules {
    pub mod recipes {
        pub mod core {
            pub mod events;
            pub mod ports;
            pub mod recipe;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod add_recipe {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod get_recipe {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod list_recipes {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod remove_recipe {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod recipe_added {
                pub mod inbound {
                    pub mod graphql;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod recipe_events_broadcast;
                pub mod recipes_in_memory;
            }
        }
        pub mod module;
        pub mod state;
    }
}

pub mod shell;
