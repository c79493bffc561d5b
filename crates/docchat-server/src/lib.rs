#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod context;
pub mod routes;

pub use context::ServiceContext;
pub use routes::{app_router, run_server, Pergunta, Resposta};
