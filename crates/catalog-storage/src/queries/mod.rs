pub mod fetch_event_ops;
