//! Static site sections the footer links to.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSection {
    Listings,
    VipAccess,
    Bitcoin,
    Contact,
    /// Shared by the privacy, terms and cookie links.
    Policy,
}

impl SiteSection {
    pub const ALL: [SiteSection; 5] = [
        SiteSection::Listings,
        SiteSection::VipAccess,
        SiteSection::Bitcoin,
        SiteSection::Contact,
        SiteSection::Policy,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SiteSection::Listings => "/listings",
            SiteSection::VipAccess => "/vip-access",
            SiteSection::Bitcoin => "/bitcoin",
            SiteSection::Contact => "/contact",
            SiteSection::Policy => "/policy",
        }
    }
}
