pub mod server_list;

pub use server_list::ServerListLoader;
