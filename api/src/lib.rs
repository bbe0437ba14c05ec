pub mod logging;
pub mod middleware;
pub mod response;
pub mod routes;
