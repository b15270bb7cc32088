//! Remote backend implementations

mod supabase;

pub use supabase::SupabaseBackend;
