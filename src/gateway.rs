pub mod events;
pub mod logs;
pub mod memory;
pub mod factory;

use crate::gateway::memory::publisher::MemoryPublisher;

#[derive(Debug)]
pub enum GatewayPublisherVia {
    Logs,
    // events land in the given buffer, shared with the caller
    Memory(MemoryPublisher),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_route_memory_publisher_to_shared_buffer() {
        let buffer = MemoryPublisher::new();
        let publisher = create_publisher(GatewayPublisherVia::Memory(buffer.clone()));
        let event = DomainEvent::added("books", "catalog", "B1", &HashMap::new(), &"B1").expect("build event");
        publisher.publish(&event).await.expect("should publish");
        assert_eq!(vec![event], buffer.events());
    }
}
