//! Destination collection selection
//!
//! Each (library, packetStyle) pair maps to one collection. Unknown mrtp
//! packet styles go to the generic mrtp collection, unknown libraries to
//! `other`.

use clap::ValueEnum;

use crate::core::record::TestRecord;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub(crate) enum Destination {
    /// mrtp with redundant packets
    #[value(name = "mrtpredundancy")]
    MrtpRedundancy,
    /// mrtp reliable delivery
    #[value(name = "mrtpreliable")]
    MrtpReliable,
    /// mrtp unsequenced delivery
    #[value(name = "mrtpunsequenced")]
    MrtpUnsequenced,
    /// mrtp redundancy without acknowledgment
    #[value(name = "mrtpredundancynoack")]
    MrtpRedundancyNoAck,
    /// mrtp with an unrecognized packet style
    Mrtp,
    Enet,
    Kcp,
    Tcp,
    /// Any other library
    Other,
}

impl Destination {
    #[cfg(test)]
    pub(crate) const ALL: [Destination; 9] = [
        Destination::MrtpRedundancy,
        Destination::MrtpReliable,
        Destination::MrtpUnsequenced,
        Destination::MrtpRedundancyNoAck,
        Destination::Mrtp,
        Destination::Enet,
        Destination::Kcp,
        Destination::Tcp,
        Destination::Other,
    ];

    pub(crate) fn select(library: &str, packet_style: &str) -> Self {
        match library {
            "mrtp" => match packet_style {
                "redundancy" => Destination::MrtpRedundancy,
                "reliable" => Destination::MrtpReliable,
                "unsequenced" => Destination::MrtpUnsequenced,
                "redundancynoack" => Destination::MrtpRedundancyNoAck,
                _ => Destination::Mrtp,
            },
            "enet" => Destination::Enet,
            "kcp" => Destination::Kcp,
            "tcp" => Destination::Tcp,
            _ => Destination::Other,
        }
    }

    /// Route a record; both `library` and `packetStyle` must be present
    pub(crate) fn for_record(record: &TestRecord) -> Result<Self, AppError> {
        let library = record.library()?;
        let packet_style = record.packet_style()?;
        Ok(Self::select(library, packet_style))
    }

    pub(crate) fn collection(self) -> &'static str {
        match self {
            Destination::MrtpRedundancy => "mrtp_redundancy_test",
            Destination::MrtpReliable => "mrtp_reliable_test",
            Destination::MrtpUnsequenced => "mrtp_unsequenced_test",
            Destination::MrtpRedundancyNoAck => "mrtp_redundancy_noack_test",
            Destination::Mrtp => "mrtp_test",
            Destination::Enet => "enet_test",
            Destination::Kcp => "kcp_test",
            Destination::Tcp => "tcp_test",
            Destination::Other => "other",
        }
    }

    /// Short name accepted on the command line
    pub(crate) fn key(self) -> &'static str {
        match self {
            Destination::MrtpRedundancy => "mrtpredundancy",
            Destination::MrtpReliable => "mrtpreliable",
            Destination::MrtpUnsequenced => "mrtpunsequenced",
            Destination::MrtpRedundancyNoAck => "mrtpredundancynoack",
            Destination::Mrtp => "mrtp",
            Destination::Enet => "enet",
            Destination::Kcp => "kcp",
            Destination::Tcp => "tcp",
            Destination::Other => "other",
        }
    }
}
