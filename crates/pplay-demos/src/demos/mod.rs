#![forbid(unsafe_code)]

//! The demo state machines.
//!
//! Each module exposes its simulation as a plain type that can be driven
//! without a surface, plus a [`Widget`](pplay_core::Widget) wrapper that binds
//! buttons and renders.

pub mod command_queue;
pub mod decorator;
pub mod plug_adapter;
pub mod robot_builder;
pub mod sequencer;
pub mod singleton;
pub mod strategy;
pub mod subscriber_bus;
pub mod transport;
pub mod vending;

pub use command_queue::CommandQueueDemo;
pub use decorator::DecoratorAccumulator;
pub use plug_adapter::PlugAdapterDemo;
pub use robot_builder::RobotBuilderDemo;
pub use sequencer::GenericSequencer;
pub use singleton::SingletonDemo;
pub use strategy::StrategySelector;
pub use subscriber_bus::SubscriberBusDemo;
pub use transport::TransportDispatcher;
pub use vending::VendingDemo;
