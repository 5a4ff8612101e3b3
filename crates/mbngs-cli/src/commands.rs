//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use mbngs_ws::{BrowseLink, EntityType, ImageSize};

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up one entity by MBID
    Lookup(LookupArgs),

    /// Search an entity type
    Search(SearchArgs),

    /// List entities linked to another entity
    Browse(BrowseArgs),

    /// Look up a disc id, optionally with a TOC for fuzzy matching
    Discid(DiscIdArgs),

    /// Recordings with an ISRC
    Isrc(IsrcArgs),

    /// Works with an ISWC
    Iswc(IswcArgs),

    /// Your collections (needs credentials)
    Collections(CollectionsArgs),

    /// Cover art listing, or download one image
    CoverArt(CoverArtArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Entity type (artist, release, release-group, ...)
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,

    /// MBID of the entity
    pub id: String,

    /// Includes, comma separated or repeated
    #[arg(long = "inc", value_delimiter = ',')]
    pub includes: Vec<String>,

    /// Release status filter
    #[arg(long = "status", value_delimiter = ',')]
    pub release_status: Vec<String>,

    /// Release type filter
    #[arg(long = "type", value_delimiter = ',')]
    pub release_type: Vec<String>,

    /// Print the XML representation instead of JSON
    #[arg(long)]
    pub xml: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Entity type to search
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,

    /// Free text or raw Lucene query
    pub query: Option<String>,

    /// Field term, e.g. `--field artist=Nirvana`
    #[arg(long = "field", value_name = "FIELD=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    #[arg(short, long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,

    /// Quote every term and require all of them
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Entity type to list
    #[arg(value_parser = parse_entity)]
    pub entity: EntityType,

    /// Linked entity, e.g. `--by artist=<mbid>`
    #[arg(long = "by", value_name = "LINK=MBID", value_parser = parse_link)]
    pub link: BrowseLink,

    #[arg(long = "inc", value_delimiter = ',')]
    pub includes: Vec<String>,

    #[arg(long = "status", value_delimiter = ',')]
    pub release_status: Vec<String>,

    #[arg(long = "type", value_delimiter = ',')]
    pub release_type: Vec<String>,

    #[arg(short, long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,

    /// Follow offsets and print every linked entity
    #[arg(long, conflicts_with = "offset")]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct DiscIdArgs {
    /// Disc id (`-` with `--toc` to match the TOC only)
    pub id: String,

    /// Table of contents: first track, last track, lead-out and track offsets
    #[arg(long)]
    pub toc: Option<String>,

    /// Never return CD stubs
    #[arg(long = "no-cdstubs")]
    pub no_cdstubs: bool,

    /// Match media of every format, not just CDs
    #[arg(long = "all-media")]
    pub all_media: bool,

    #[arg(long = "inc", value_delimiter = ',')]
    pub includes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct IsrcArgs {
    pub isrc: String,

    #[arg(long = "inc", value_delimiter = ',')]
    pub includes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct IswcArgs {
    pub iswc: String,
}

#[derive(Debug, Args)]
pub struct CollectionsArgs {
    #[arg(short, long)]
    pub limit: Option<u32>,

    #[arg(long)]
    pub offset: Option<u32>,
}

#[derive(Debug, Args)]
pub struct CoverArtArgs {
    /// Release MBID (release group MBID with `--release-group`)
    pub mbid: String,

    /// Treat the MBID as a release group
    #[arg(long = "release-group")]
    pub release_group: bool,

    /// Download the front cover
    #[arg(long, conflicts_with_all = ["back", "image"])]
    pub front: bool,

    /// Download the back cover
    #[arg(long, conflicts_with = "image")]
    pub back: bool,

    /// Download the image with this id
    #[arg(long)]
    pub image: Option<String>,

    /// Image size: 250, 500, 1200 or original
    #[arg(long, default_value = "original", value_parser = parse_size)]
    pub size: ImageSize,

    /// Where to save a downloaded image
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CoverArtArgs {
    /// The image to download, if any.
    pub fn cover(&self) -> Option<&str> {
        if self.front {
            Some("front")
        } else if self.back {
            Some("back")
        } else {
            self.image.as_deref()
        }
    }
}

// ============================================================================
// Value parsers
// ============================================================================

fn parse_entity(value: &str) -> Result<EntityType, String> {
    EntityType::parse(value).ok_or_else(|| format!("unknown entity type: {value}"))
}

fn parse_field(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(field, term)| (field.trim().to_string(), term.to_string()))
        .filter(|(field, _)| !field.is_empty())
        .ok_or_else(|| format!("expected FIELD=VALUE, got {value}"))
}

fn parse_link(value: &str) -> Result<BrowseLink, String> {
    BrowseLink::parse(value).ok_or_else(|| format!("expected LINK=MBID, got {value}"))
}

fn parse_size(value: &str) -> Result<ImageSize, String> {
    ImageSize::parse(value).ok_or_else(|| format!("unknown image size: {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["mbngs"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv).command.unwrap()
    }

    #[test]
    fn test_lookup_args() {
        let Commands::Lookup(args) = command(&[
            "lookup",
            "release-group",
            "abc",
            "--inc",
            "artists,releases",
            "--type",
            "album",
        ]) else {
            panic!("expected lookup");
        };
        assert_eq!(args.entity, EntityType::ReleaseGroup);
        assert_eq!(args.includes, vec!["artists", "releases"]);
        assert_eq!(args.release_type, vec!["album"]);
        assert!(!args.xml);
    }

    #[test]
    fn test_unknown_entity_rejected() {
        assert!(Cli::try_parse_from(["mbngs", "lookup", "song", "x"]).is_err());
    }

    #[test]
    fn test_search_fields() {
        let Commands::Search(args) = command(&[
            "search",
            "artist",
            "--field",
            "artist=Sigur Rós",
            "--field",
            "country=IS",
            "--strict",
        ]) else {
            panic!("expected search");
        };
        assert_eq!(
            args.fields,
            vec![
                ("artist".to_string(), "Sigur Rós".to_string()),
                ("country".to_string(), "IS".to_string()),
            ]
        );
        assert!(args.strict);
        assert!(args.query.is_none());
        assert!(Cli::try_parse_from(["mbngs", "search", "artist", "--field", "nope"]).is_err());
    }

    #[test]
    fn test_browse_link() {
        let Commands::Browse(args) =
            command(&["browse", "release", "--by", "track_artist=abc", "--all"])
        else {
            panic!("expected browse");
        };
        assert_eq!(args.link, BrowseLink::TrackArtist("abc".to_string()));
        assert!(args.all);
    }

    #[test]
    fn test_cover_art_choice() {
        let Commands::CoverArt(args) = command(&["cover-art", "r1", "--back", "--size", "500"]) else {
            panic!("expected cover-art");
        };
        assert_eq!(args.cover(), Some("back"));
        assert_eq!(args.size, ImageSize::Large);

        let Commands::CoverArt(args) = command(&["cover-art", "r1"]) else {
            panic!("expected cover-art");
        };
        assert_eq!(args.cover(), None);
        assert_eq!(args.size, ImageSize::Original);

        assert!(Cli::try_parse_from(["mbngs", "cover-art", "r1", "--front", "--back"]).is_err());
    }
}
