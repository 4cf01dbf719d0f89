pub mod catalog_translator;
pub mod in_memory_navigator;
pub mod in_memory_notifier;
pub mod in_memory_storage;
