pub mod acceptor;
pub mod routes;
