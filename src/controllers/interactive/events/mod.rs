pub mod compute_event;
