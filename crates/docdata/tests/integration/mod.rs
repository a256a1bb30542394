mod documents;
mod shared_registry;
