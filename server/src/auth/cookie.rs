use chrono::Duration;

/// Name of the cookie carrying the session token.
pub const AUTH_COOKIE: &str = "access_token_cookie";

/// Build the `Set-Cookie` value that hands the session token to a browser.
pub fn auth_cookie(token: &str, max_age: Duration, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        AUTH_COOKIE,
        token,
        max_age.num_seconds()
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that makes the browser drop the session cookie.
pub fn expired_auth_cookie(secure: bool) -> String {
    auth_cookie("", Duration::zero(), secure)
}

/// Look up a cookie in a `Cookie` header value ("a=1; b=2").
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie("abc", Duration::minutes(60), false);
        assert_eq!(
            cookie,
            "access_token_cookie=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );
        assert!(auth_cookie("abc", Duration::minutes(1), true).ends_with("; Secure"));
    }

    #[test]
    fn test_expired_cookie() {
        assert!(expired_auth_cookie(false).contains("access_token_cookie=;"));
        assert!(expired_auth_cookie(false).contains("Max-Age=0"));
    }

    #[test]
    fn test_cookie_value() {
        let header = "theme=dark; access_token_cookie=deadbeef ;other=1";
        assert_eq!(cookie_value(header, AUTH_COOKIE), Some("deadbeef"));
        assert_eq!(cookie_value(header, "theme"), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("", AUTH_COOKIE), None);
    }
}
