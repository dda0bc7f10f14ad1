// Standard library
use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

// 3rd party crates
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};

// Current module imports
use super::errors::LookupError;
use super::types::LookupAnswer;

/// Encodes a recursive `A` query for `host`.
pub fn build_query(host: &str, id: u16) -> Result<Vec<u8>, LookupError> {
    let fqdn: String = if host.ends_with('.') {
        host.to_string()
    } else {
        format!("{}.", host)
    };
    let name: Name = Name::from_ascii(&fqdn).map_err(|source| LookupError::InvalidName {
        host: host.to_string(),
        source,
    })?;

    let mut message: Message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name, RecordType::A));

    Ok(message.to_vec()?)
}

/// Resolves `host` through the operating system resolver. Blocks.
pub fn resolve_system(host: &str) -> io::Result<Vec<SocketAddr>> {
    (host, 0).to_socket_addrs().map(|addresses| addresses.collect())
}

/// Classifies a decoded answer to the query with the given id.
pub fn parse_response(message: &Message, id: u16) -> Result<LookupAnswer, LookupError> {
    if message.id() != id {
        return Err(LookupError::IdMismatch {
            expected: id,
            got: message.id(),
        });
    }

    let code: ResponseCode = message.response_code();
    if code != ResponseCode::NoError {
        return Err(LookupError::NegativeResponse(rcode_label(code)));
    }

    Ok(LookupAnswer {
        response_code: Some(rcode_label(code)),
        answers: message.answers().len(),
    })
}

/// Standard mnemonic for a response code, used as the `rcode` label.
pub fn rcode_label(code: ResponseCode) -> String {
    let label = match u16::from(code) {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADSIG",
        17 => "BADKEY",
        18 => "BADTIME",
        19 => "BADMODE",
        20 => "BADNAME",
        21 => "BADALG",
        22 => "BADTRUNC",
        23 => "BADCOOKIE",
        other => return format!("RCODE{}", other),
    };
    label.to_string()
}
