use crate::core::library::LibraryResult;

// Repository is the synchronous, in-memory store contract shared by catalog records.
// Identifiers are compared case-insensitively.
pub trait Repository<Entity>: Sync + Send {
    // create an entity, returns the new size of the store
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // replaces every field of the stored entity except its identifier
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity and return it
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // all entities in store order
    fn find_all(&self) -> Vec<Entity>;
}
