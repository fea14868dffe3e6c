pub mod encoded_token;
pub mod error;
pub mod token_codec;
pub mod token_payload;

pub use encoded_token::EncodedToken;
pub use error::{Result, TokenError};
pub use token_codec::{decode_token, encode_token};
pub use token_payload::TokenPayload;
