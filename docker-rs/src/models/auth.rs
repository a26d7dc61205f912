// Copyright (c) Microsoft. All rights reserved.

docker_model! {
    /// Registry credentials. Sent base64-encoded in the `X-Registry-Auth`
    /// header, or as the body of `POST /auth`.
    pub struct AuthConfig {
        "username" => username: String,
        "password" => password: String,
        "auth" => auth: String,
        "email" => email: String,
        /// Domain/IP without a protocol.
        "serveraddress" => serveraddress: String,
        /// Token previously returned by `POST /auth`, used instead of
        /// credentials.
        "identitytoken" => identitytoken: String,
        "registrytoken" => registrytoken: String,
    }
}

docker_model! {
    pub struct SystemAuthResponse {
        /// The status of the authentication
        "Status" => status: String,
        /// An opaque token used to authenticate a user after a successful login
        "IdentityToken" => identity_token: String,
    }
}
