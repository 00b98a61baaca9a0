use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SupplyChainError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    NotOwner = 10,
    NotFarmer = 11,
    NotShipper = 12,
    NotReceiver = 13,
    NotMetadataEditor = 14,

    // Product lookup errors
    ProductNotFound = 20,
    ProductAlreadyExists = 21,

    // Validation errors
    InvalidProductId = 30,
    EmptyName = 31,
    EmptyOrigin = 32,

    // State machine errors
    NotInCreatedState = 40,
    NotInShippedState = 41,
}

/// Coarse classification of a [`SupplyChainError`], for callers that only
/// need to know which class of guidance to present.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Initialization,
    NotAuthorized,
    NotFound,
    AlreadyExists,
    InvalidArgument,
    WrongState,
}

impl SupplyChainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyInitialized | Self::NotInitialized => ErrorKind::Initialization,
            Self::NotOwner
            | Self::NotFarmer
            | Self::NotShipper
            | Self::NotReceiver
            | Self::NotMetadataEditor => ErrorKind::NotAuthorized,
            Self::ProductNotFound => ErrorKind::NotFound,
            Self::ProductAlreadyExists => ErrorKind::AlreadyExists,
            Self::InvalidProductId | Self::EmptyName | Self::EmptyOrigin => {
                ErrorKind::InvalidArgument
            }
            Self::NotInCreatedState | Self::NotInShippedState => ErrorKind::WrongState,
        }
    }

    /// Human-readable reason, suitable for showing verbatim to an operator.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "Already initialized",
            Self::NotInitialized => "Not initialized",
            Self::NotOwner => "Not authorized: owner",
            Self::NotFarmer => "Not authorized: farmer",
            Self::NotShipper => "Not authorized: shipper",
            Self::NotReceiver => "Not authorized: receiver",
            Self::NotMetadataEditor => "Not authorized: metadata",
            Self::ProductNotFound => "Product does not exist",
            Self::ProductAlreadyExists => "Product already exists",
            Self::InvalidProductId => "Invalid product id",
            Self::EmptyName => "Empty name",
            Self::EmptyOrigin => "Empty origin",
            Self::NotInCreatedState => "Not in Created state",
            Self::NotInShippedState => "Not in Shipped state",
        }
    }
}
