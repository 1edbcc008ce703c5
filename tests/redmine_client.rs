#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hamster_redmine::api::{IssueTracker, Redmine, RedmineError};
    use hamster_redmine::libs::catalog::Activity;
    use hamster_redmine::libs::entry::TimeEntry;
    use reqwest::blocking::Client;
    use serde_json::{json, Value};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Answers exactly one request with a canned response and hands back the raw request.
    fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let host = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request
        });
        (host, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let read = stream.read(&mut buf).unwrap();
            if read == 0 {
                break;
            }
            data.extend_from_slice(&buf[..read]);
            if let Some(end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&data[..end]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .map(|value| value.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                if data.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(data).unwrap()
    }

    /// Splits a raw request into its request line, lowercased headers and body.
    fn split_request(raw: &str) -> (String, String, String) {
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let (line, headers) = head.split_once("\r\n").unwrap();
        (line.to_string(), headers.to_lowercase(), body.to_string())
    }

    fn redmine(host: &str) -> Redmine {
        let client = Client::builder().no_proxy().build().unwrap();
        Redmine::with_client(client, host, "secret").unwrap()
    }

    fn entry() -> TimeEntry {
        TimeEntry {
            issue_id: 123,
            activity_id: 9,
            spent_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hours: 2.25,
            comments: "Fix login".to_string(),
        }
    }

    #[test]
    fn test_host_is_normalized() {
        let redmine = Redmine::new(" https://redmine.example.com/ ", "secret").unwrap();

        assert_eq!(redmine.config().host, "https://redmine.example.com");
        assert_eq!(redmine.config().key, "secret");
    }

    #[test]
    fn test_host_requires_scheme() {
        let result = Redmine::new("redmine.example.com", "secret");

        match result {
            Err(RedmineError::InvalidHost(host)) => assert_eq!(host, "redmine.example.com"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_activities_skip_inactive_entries() {
        let (host, server) = serve_once(
            "200 OK",
            r#"{"time_entry_activities": [
                {"id": 9, "name": "Development", "is_default": true},
                {"id": 8, "name": "Design", "active": false},
                {"id": 11, "name": "Testing", "active": true}
            ]}"#,
        );

        let activities = redmine(&format!("{}/", host)).activities().unwrap();
        let (line, headers, _) = split_request(&server.join().unwrap());

        assert_eq!(line, "GET /enumerations/time_entry_activities.json HTTP/1.1");
        assert!(headers.contains("x-redmine-api-key: secret"));
        assert_eq!(
            activities,
            vec![
                Activity { id: 9, name: "Development".to_string() },
                Activity { id: 11, name: "Testing".to_string() },
            ]
        );
    }

    #[test]
    fn test_create_time_entry_posts_wrapped_json() {
        let (host, server) = serve_once("201 Created", r#"{"time_entry": {"id": 1}}"#);

        redmine(&host).create_time_entry(&entry()).unwrap();
        let (line, headers, body) = split_request(&server.join().unwrap());

        assert_eq!(line, "POST /time_entries.json HTTP/1.1");
        assert!(headers.contains("x-redmine-api-key: secret"));
        assert!(headers.contains("content-type: application/json"));
        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({"time_entry": {
                "issue_id": 123,
                "activity_id": 9,
                "spent_on": "2024-03-01",
                "hours": 2.25,
                "comments": "Fix login"
            }})
        );
    }

    #[test]
    fn test_validation_errors_are_reported() {
        let (host, server) = serve_once(
            "422 Unprocessable Entity",
            r#"{"errors": ["Hours cannot be blank", "Issue is invalid"]}"#,
        );

        let result = redmine(&host).create_time_entry(&entry());
        server.join().unwrap();

        match result {
            Err(RedmineError::Rejected { status, details }) => {
                assert_eq!(status, 422);
                assert_eq!(details, "Hours cannot be blank; Issue is invalid");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bare_status_is_reported() {
        let (host, server) = serve_once("401 Unauthorized", "");

        let result = redmine(&host).activities();
        server.join().unwrap();

        match result {
            Err(RedmineError::Rejected { status, details }) => {
                assert_eq!(status, 401);
                assert_eq!(details, "Unauthorized");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
