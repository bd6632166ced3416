#[cfg(test)]
mod tests {
    use std::io::Read;

    use utils::traits::reader::{ReadFrom, TryReadFrom};

    use crate::{
        consts::{status::RtspStatus, version::RtspVersion},
        header::RtspHeader,
        response::RtspResponse,
    };

    #[test]
    fn options() {
        let response = RtspResponse::builder()
            .version(RtspVersion::V2)
            .status(RtspStatus::OK)
            .header(RtspHeader::CSeq, "1")
            .header(
                RtspHeader::Public,
                "DESCRIBE, SETUP, TEARDOWN, PLAY, PAUSE, OPTIONS",
            )
            .header(RtspHeader::Server, "PhonyServer/1.1")
            .build();
        assert!(response.is_ok());
        let response = response.unwrap();
        assert_eq!(response.cseq(), Some(1));
        let text = "RTSP/2.0 200 OK\r\n\
CSeq: 1\r\n\
Public: DESCRIBE, SETUP, TEARDOWN, PLAY, PAUSE, OPTIONS\r\n\
Server: PhonyServer/1.1\r\n\r\n";
        assert_eq!(text.trim_end(), format!("{}", response).trim_end());
        let parsed = RtspResponse::read_from(text.as_bytes());
        assert!(parsed.is_ok());
        assert_eq!(text.trim_end(), format!("{}", parsed.unwrap()).trim_end());
    }

    #[test]
    fn describe_with_sdp_body() {
        let body = "v=0\r\n\
o=MNobody 2890844526 2890842807 IN IP4 192.0.2.46\r\n\
s=SDP Seminar\r\n\
c=IN IP4 0.0.0.0\r\n\
t=2873397496 2873404696\r\n\
m=audio 3456 RTP/AVP 0";

        let response = RtspResponse::builder()
            .version(RtspVersion::V2)
            .status(RtspStatus::OK)
            .header(RtspHeader::CSeq, "312")
            .header(RtspHeader::ContentBase, "rtsp://server.example.com/fizzle/foo/")
            .header(RtspHeader::ContentType, "application/sdp")
            .body(body.to_owned())
            .build();

        assert!(response.is_ok());
        let response = response.unwrap();

        let text = format!(
            "{}\r\n{}",
            "RTSP/2.0 200 OK\r\n\
CSeq: 312\r\n\
Content-Base: rtsp://server.example.com/fizzle/foo/\r\n\
Content-Type: application/sdp\r\n\
Content-Length: 136\r\n",
            body
        );
        assert_eq!(text.trim_end(), format!("{}", response).trim_end());
        assert_eq!(response.body().clone().unwrap(), body);

        let parsed = RtspResponse::read_from(text.as_bytes());
        assert!(parsed.is_ok());
        let parsed = parsed.unwrap();
        assert_eq!(text.trim_end(), format!("{}", parsed).trim_end());
        assert_eq!(parsed.body().clone().unwrap().trim_end(), body);
    }

    #[test]
    fn setup() {
        let response = RtspResponse::builder()
            .version(RtspVersion::V2)
            .status(RtspStatus::OK)
            .header(RtspHeader::CSeq, "302")
            .header(RtspHeader::Session, "QKyjN8nt2WqbWw4tIYof52;timeout=60")
            .header(RtspHeader::Transport, "RTP/AVP;unicast;dest_addr=\"192.0.2.53:4588\"/\"192.0.2.53:4589\"")
            .build();
        assert!(response.is_ok());
        let response = response.unwrap();
        let text = "RTSP/2.0 200 OK\r\n\
CSeq: 302\r\n\
Session: QKyjN8nt2WqbWw4tIYof52;timeout=60\r\n\
Transport: RTP/AVP;unicast;dest_addr=\"192.0.2.53:4588\"/\"192.0.2.53:4589\"\r\n\r\n";
        assert_eq!(text.trim_end(), format!("{}", response).trim_end());
        let parsed = RtspResponse::read_from(text.as_bytes());
        assert!(parsed.is_ok());
        assert_eq!(text.trim_end(), format!("{}", parsed.unwrap()).trim_end());
    }

    #[test]
    fn teardown() {
        let response = RtspResponse::builder()
            .version(RtspVersion::V2)
            .status(RtspStatus::OK)
            .header(RtspHeader::CSeq, "892")
            .header(RtspHeader::Server, "PhonyServer/1.0")
            .build();
        assert!(response.is_ok());
        let text = "RTSP/2.0 200 OK\r\n\
CSeq: 892\r\n\
Server: PhonyServer/1.0\r\n\r\n";
        let response = response.unwrap();
        assert_eq!(text.trim_end(), format!("{}", response).trim_end());
        let parsed = RtspResponse::read_from(text.as_bytes());
        assert!(parsed.is_ok());
        assert_eq!(text.trim_end(), format!("{}", parsed.unwrap()).trim_end());
    }

    #[test]
    fn get_parameter_incomplete() {
        let text = "RTSP/2.0 200 OK\r\n\
CSeq: 431\r\n\
Session: OccldOFFq23KwjYpAnBbUr\r\n\
Content-Type: text/parameters\r\n\
Content-Length: 36\r\n";
        let body = "packets_received: 10\r\njitter: ";
        let text = format!("{}\r\n{}", text, body);
        let mut cursor = std::io::Cursor::new(text.as_bytes());
        let response = RtspResponse::try_read_from(cursor.by_ref());
        assert!(response.is_ok());
        let response = response.unwrap();
        assert!(response.is_none());
    }

    #[test]
    fn set_parameter_error_status() {
        let response = RtspResponse::builder()
            .version(RtspVersion::V2)
            .status(RtspStatus::ParameterNotUnderstood)
            .header(RtspHeader::CSeq, "421")
            .header(RtspHeader::ContentType, "text/parameters")
            .body("barparam: barstuff".to_owned())
            .build();
        assert!(response.is_ok());
        let text = "RTSP/2.0 451 Parameter Not Understood\r\n\
CSeq: 421\r\n\
Content-Type: text/parameters\r\n\
Content-Length: 18\r\n";
        let body = "barparam: barstuff";
        let text = format!("{}\r\n{}", text, body);
        let response = response.unwrap();
        assert_eq!(text.trim_end(), format!("{}", response).trim_end());

        let parsed = RtspResponse::read_from(text.as_bytes());
        assert!(parsed.is_ok());
        let parsed = parsed.unwrap();
        assert_eq!(text.trim_end(), format!("{}", parsed).trim_end());
        assert_eq!(body, parsed.body().clone().unwrap());
    }

    #[test]
    fn redirect_no_body() {
        let response = RtspResponse::builder()
            .version(RtspVersion::V2)
            .status(RtspStatus::OK)
            .header(RtspHeader::CSeq, "732")
            .header(RtspHeader::Session, "uZ3ci0K+Ld-M")
            .build();
        assert!(response.is_ok());
        let text = "RTSP/2.0 200 OK\r\n\
CSeq: 732\r\n\
Session: uZ3ci0K+Ld-M\r\n\r\n";
        let response = response.unwrap();
        assert_eq!(text.trim_end(), format!("{}", response).trim_end());
        assert!(response.body().is_none());
        let parsed = RtspResponse::read_from(text.as_bytes());
        assert!(parsed.is_ok());
        let parsed = parsed.unwrap();
        assert_eq!(text.trim_end(), format!("{}", parsed).trim_end());
        assert!(parsed.body().is_none());
    }

    #[test]
    fn redirect_incomplete() {
        let text = "RTSP/2.0 200 OK\r\n\
CSeq: 732\r\n\
Session: uZ3ci0K+Ld-M";

        let mut cursor = std::io::Cursor::new(text.as_bytes());
        let response = RtspResponse::try_read_from(cursor.by_ref());
        assert!(response.is_ok());
        let response = response.unwrap();
        assert!(response.is_none());
    }
}
