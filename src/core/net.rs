// src/core/net.rs
//
// Login + report GET over a blocking ureq agent.
// The agent's cookie jar is the session: one agent per refresh, dropped afterwards.

use ureq::{Agent, AgentBuilder, Response};

use crate::config::{consts::LOGIN_PAGE_MARKER, credentials::Credentials, options::PortalOptions};
use crate::error::ReportError;

const USER_AGENT: &str = concat!("tower_report/", env!("CARGO_PKG_VERSION"));

/// An authenticated portal session. Holds the cookies set by the login response.
pub struct Session {
    agent: Agent,
    landed_on: String,
}

impl Session {
    /// URL the login request finally landed on (after redirects).
    pub fn landed_on(&self) -> &str {
        &self.landed_on
    }

    /// GET the report page with this session's cookies and return the raw HTML.
    pub fn fetch_report(&self, report_url: &str) -> Result<String, ReportError> {
        let resp = match self.agent.get(report_url).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(status, _)) => {
                return Err(ReportError::Fetch { url: s!(report_url), status });
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(ReportError::Transport { url: s!(report_url), source: Box::new(t) });
            }
        };

        if resp.status() != 200 {
            return Err(ReportError::Fetch { url: s!(report_url), status: resp.status() });
        }
        logd!("Net: GET {} → {}", report_url, resp.status());
        read_body(resp, report_url)
    }
}

fn new_agent() -> Agent {
    // ureq's `cookies` feature gives every agent its own empty jar
    AgentBuilder::new().user_agent(USER_AGENT).build()
}

/// Post the credentials as a form and judge the result.
///
/// Success is a 200 whose final URL (after redirects) no longer points at a login page.
/// One attempt; no retry.
pub fn login(portal: &PortalOptions, creds: &Credentials) -> Result<Session, ReportError> {
    let agent = new_agent();
    let url = portal.login_url.as_str();

    let resp = match agent
        .post(url)
        .send_form(&[("username", creds.username()), ("password", creds.password())])
    {
        Ok(r) => r,
        Err(ureq::Error::Status(status, _)) => {
            return Err(ReportError::Authentication(format!("server answered {status}")));
        }
        Err(ureq::Error::Transport(t)) => {
            return Err(ReportError::Transport { url: s!(url), source: Box::new(t) });
        }
    };

    let status = resp.status();
    let landed_on = s!(resp.get_url());
    logd!("Net: POST {} → {} (landed on {})", url, status, landed_on);

    check_login(status, &landed_on)?;
    Ok(Session { agent, landed_on })
}

/// The pass/fail rule for a login response.
pub fn check_login(status: u16, final_url: &str) -> Result<(), ReportError> {
    if status != 200 {
        return Err(ReportError::Authentication(format!("server answered {status}")));
    }
    if final_url.to_ascii_lowercase().contains(LOGIN_PAGE_MARKER) {
        return Err(ReportError::Authentication(format!(
            "redirected back to the login page ({final_url})"
        )));
    }
    Ok(())
}

fn read_body(resp: Response, url: &str) -> Result<String, ReportError> {
    resp.into_string()
        .map_err(|source| ReportError::Read { url: s!(url), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_ok_when_landing_elsewhere() {
        assert!(check_login(200, "http://portal/Dashboard").is_ok());
    }

    #[test]
    fn login_page_marker_is_case_insensitive() {
        let err = check_login(200, "http://portal/Auth/LOGIN?ReturnUrl=%2F").unwrap_err();
        assert!(matches!(err, ReportError::Authentication(_)));
    }

    #[test]
    fn non_200_is_rejected_even_off_login_page() {
        let err = check_login(204, "http://portal/Home").unwrap_err();
        assert_eq!(err.kind(), "auth");
    }
}
