use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ClusterError {
    OddLength(String),
    NotHex { cluster: String, digit: char },
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::OddLength(cluster) => {
                write!(f, "cluster '{}' length not a multiple of 2.", cluster)
            }
            ClusterError::NotHex { cluster, digit } => {
                write!(f, "cluster '{}' contains non-hex character '{}'.", cluster, digit)
            }
        }
    }
}

impl std::error::Error for ClusterError {}

fn nibble(cluster: &str, digit: u8) -> Result<u8, ClusterError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(ClusterError::NotHex {
            cluster: cluster.to_owned(),
            // report the whole char, not the byte
            digit: cluster
                .chars()
                .find(|c| !c.is_ascii_hexdigit())
                .unwrap_or(digit as char),
        }),
    }
}

/// Decode one cluster, two hex digits per byte, high nibble first.
pub fn decode_cluster(cluster: &str) -> Result<Vec<u8>, ClusterError> {
    let digits = cluster.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(ClusterError::OddLength(cluster.to_owned()));
    }
    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8, ClusterError> {
            Ok(nibble(cluster, pair[0])? << 4 | nibble(cluster, pair[1])?)
        })
        .collect()
}

/// Decode every cluster in order. Nothing is returned unless all of them are valid.
pub fn decode_clusters<'a, I>(clusters: I) -> Result<Vec<u8>, ClusterError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bytes = Vec::new();
    for cluster in clusters {
        bytes.extend(decode_cluster(cluster)?);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cluster() {
        assert_eq!(decode_cluster("ab"), Ok(vec![0xab]));
        assert_eq!(decode_cluster("123456"), Ok(vec![0x12, 0x34, 0x56]));
        assert_eq!(decode_cluster("fF0a"), Ok(vec![0xff, 0x0a]));
        assert_eq!(decode_cluster(""), Ok(vec![]));
    }

    #[test]
    fn test_decode_clusters_keeps_order() {
        let bytes = decode_clusters(["ab", "cd", "ef", "123456"]).unwrap();
        assert_eq!(bytes, [0xab, 0xcd, 0xef, 0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_bad_clusters() {
        assert_eq!(
            decode_cluster("abc"),
            Err(ClusterError::OddLength("abc".to_owned()))
        );
        assert_eq!(
            decode_clusters(["ab", "zz"]),
            Err(ClusterError::NotHex {
                cluster: "zz".to_owned(),
                digit: 'z'
            })
        );
        assert_eq!(
            decode_cluster("é"),
            Err(ClusterError::NotHex {
                cluster: "é".to_owned(),
                digit: 'é'
            })
        );
        assert_eq!(
            ClusterError::OddLength("abc".to_owned()).to_string(),
            "cluster 'abc' length not a multiple of 2."
        );
    }
}
