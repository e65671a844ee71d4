//! Request definitions
//!
//! Represents commands sent to the daemon.

/// Command names understood by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Pull,
    Push,
    Refresh,
    Glob,
}

impl CommandType {
    /// Name as it appears first on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Pull => "PULL",
            CommandType::Push => "PUSH",
            CommandType::Refresh => "REFRESH",
            CommandType::Glob => "GLOB",
        }
    }
}

/// A typed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch one or more objects into the local cache
    Pull {
        filespec: String,
        schema: String,
        bucket: String,
        keys: Vec<String>,
    },

    /// Upload a local file as `bucket/key`
    Push {
        bucket: String,
        key: String,
        local_path: String,
    },

    /// Re-list a bucket
    Refresh { bucket: String },

    /// List keys of a bucket matching a glob pattern
    Glob { bucket: String, pattern: String },
}

impl Request {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Request::Pull { .. } => CommandType::Pull,
            Request::Push { .. } => CommandType::Push,
            Request::Refresh { .. } => CommandType::Refresh,
            Request::Glob { .. } => CommandType::Glob,
        }
    }

    /// Flatten into the ordered argument list, command name first
    pub fn args(&self) -> Vec<&str> {
        let mut args = vec![self.command_type().as_str()];
        match self {
            Request::Pull {
                filespec,
                schema,
                bucket,
                keys,
            } => {
                args.extend([filespec.as_str(), schema.as_str(), bucket.as_str()]);
                args.extend(keys.iter().map(String::as_str));
            }
            Request::Push {
                bucket,
                key,
                local_path,
            } => {
                args.extend([bucket.as_str(), key.as_str(), local_path.as_str()]);
            }
            Request::Refresh { bucket } => args.push(bucket.as_str()),
            Request::Glob { bucket, pattern } => {
                args.extend([bucket.as_str(), pattern.as_str()]);
            }
        }
        args
    }
}
