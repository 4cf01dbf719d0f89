// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - The console binary and the integration tests import modules from this crate root.

pub mod core {
    pub mod employee;
    pub mod ports;
    pub mod route;
    pub mod store;
    pub mod view;
}

pub mod application {
    pub mod employee_workflow;
    pub mod errors;
    pub mod persistence;
    pub mod search_debouncer;
    pub mod store;
    pub mod command_handlers {
        pub mod add_employee_handler;
        pub mod delete_employee_handler;
        pub mod request_lifecycle;
        pub mod update_employee_handler;
    }
}

pub mod adapters {
    pub mod in_memory;
    pub mod file {
        pub mod file_storage;
    }
    pub mod simulated {
        pub mod simulated_gateway;
    }
    pub mod system {
        pub mod clock;
    }
}

pub mod shell;
