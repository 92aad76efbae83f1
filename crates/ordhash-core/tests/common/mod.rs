pub mod gateway_server;
