//! Authentication context, hooks and route guard

pub mod context;
pub mod guard;

pub use context::{
    use_auth, use_auth_state, use_is_authenticated, AuthAction, AuthContext, AuthContextData,
    AuthProvider,
};
pub use guard::RequireAuth;
