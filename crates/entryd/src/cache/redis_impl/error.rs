//! Redis error mapping to CacheError.

use entryd_core::cache::CacheError;

/// Maps Redis errors to CacheError.
///
/// Anything at the transport level (refused, timed out, dropped, or any
/// other I/O failure) is a `ConnectionFailed`.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal()
        || err.is_timeout()
        || err.is_connection_dropped()
        || err.is_io_error()
        || err.kind() == redis::ErrorKind::IoError
    {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_maps_to_operation_failed() {
        let err = redis::RedisError::from((redis::ErrorKind::TypeError, "unexpected type"));

        assert!(matches!(
            map_redis_error(err),
            CacheError::OperationFailed(_)
        ));
    }

    #[test]
    fn test_refused_connection_maps_to_connection_failed() {
        let io = std::io::Error::from(std::io::ErrorKind::ConnectionRefused);
        let err = redis::RedisError::from(io);

        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_terminated_driver_maps_to_connection_failed() {
        let err = redis::RedisError::from((
            redis::ErrorKind::IoError,
            "Multiplexed connection driver unexpectedly terminated",
        ));

        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_unreachable_host_maps_to_connection_failed() {
        let io = std::io::Error::from(std::io::ErrorKind::HostUnreachable);
        let err = redis::RedisError::from(io);

        assert!(matches!(
            map_redis_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }
}
