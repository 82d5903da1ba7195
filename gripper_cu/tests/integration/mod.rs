mod dispatch;
mod mock;
mod node_config;
mod telemetry;
