pub mod books;

use std::sync::Arc;

use bookrack_kernel::ModuleRegistry;
use bookrack_store::TableClient;

use self::books::dynamo::DynamoBookRepository;

/// Register all bookrack modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, table: TableClient) {
    let repository = Arc::new(DynamoBookRepository::new(table));
    registry.register(books::create_module(repository));
}
