use crate::tools::descriptor::{EndpointDescriptor, HttpMethod, ParamSpec, ResponseShape};

const LANGUAGE: ParamSpec = ParamSpec::string(
    "language",
    "Language of the Quote. The language must be supported in our system.",
);
const LIMIT: ParamSpec = ParamSpec::number(
    "limit",
    "No of quotes to return. The max limit depends on the subscription level.",
);
const START: ParamSpec = ParamSpec::number(
    "start",
    "Response is paged. This parameter controls where response starts the listing at",
);
const PAGE_LIMIT: ParamSpec = ParamSpec::number(
    "limit",
    "Response is paged. This parameter controls how many is returned in the result. The maximum depends on the subscription level.",
);
const QUOTE_ID: ParamSpec = ParamSpec::string("quote_id", "Quote ID").required();

pub const TOOLS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "get_quote",
        description: "Gets quote details for a given `Quote` id.",
        method: HttpMethod::Get,
        path: "/quote",
        params: &[
            ParamSpec::string("id", "Quote ID").required(),
            ParamSpec::boolean(
                "detailed",
                "Include extended details of the quote. Only available at certain subscription levels.",
            ),
        ],
        shape: ResponseShape::TypedQuote,
    },
    EndpointDescriptor {
        name: "get_quote_random",
        description: "Gets a `Random Quote`. When you are in a hurry this is what you call to get a random famous quote.",
        method: HttpMethod::Get,
        path: "/quote/random",
        params: &[LANGUAGE, LIMIT],
        shape: ResponseShape::TypedQuote,
    },
    EndpointDescriptor {
        name: "get_quote_search",
        description: "Search for a `Quote` in They Said So platform. Optional `category` , `author`, `minlength`, `maxlength` params determines the filters applied while searching for the quote.",
        method: HttpMethod::Get,
        path: "/quote/search",
        params: &[
            ParamSpec::string("category", "Quote Category"),
            ParamSpec::string("author", "Quote Author"),
            ParamSpec::number("minlength", "Quote minimum Length"),
            ParamSpec::number("maxlength", "Quote maximum Length"),
            ParamSpec::string("query", "keyword to search for in the quote"),
            ParamSpec::boolean(
                "private",
                "Should search private collection? Default searches public collection.",
            ),
            LANGUAGE,
            LIMIT,
            ParamSpec::boolean("sfw", "Should search only SFW (Safe For Work) quotes?"),
        ],
        shape: ResponseShape::TypedQuote,
    },
    EndpointDescriptor {
        name: "get_quote_authors_search",
        description: "Gets a list of author names in the system.",
        method: HttpMethod::Get,
        path: "/quote/authors/search",
        params: &[
            ParamSpec::string("query", "Text string to search for in author names"),
            ParamSpec::string(
                "language",
                "Language. A same author may have quotes in two or more different languages. So for example 'Mahatma Gandhi' may be returned for language \"en\"(English), and \"மஹாத்மா காந்தி\" may be returned when the language is \"ta\" (Tamil).",
            ),
            ParamSpec::boolean(
                "detailed",
                "Should return detailed author information such as `birthday`, `death date`, `occupation`, `description` etc. Only available at certain subscription levels.",
            ),
            START,
            PAGE_LIMIT,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_authors_popular",
        description: "Gets a list of popular author names in the system.",
        method: HttpMethod::Get,
        path: "/quote/authors/popular",
        params: &[
            ParamSpec::string("language", "Language of the authors' quotes."),
            ParamSpec::boolean(
                "detailed",
                "Should return detailed author information. Only available at certain subscription levels.",
            ),
            START,
            PAGE_LIMIT,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_categories_search",
        description: "Gets a list of quote categories matching a search term.",
        method: HttpMethod::Get,
        path: "/quote/categories/search",
        params: &[
            ParamSpec::string("query", "Text string to search for in category names"),
            ParamSpec::string("language", "Language of the categories."),
            ParamSpec::boolean("detailed", "Should return detailed category information."),
            START,
            PAGE_LIMIT,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_categories_popular",
        description: "Gets a list of popular quote categories.",
        method: HttpMethod::Get,
        path: "/quote/categories/popular",
        params: &[
            ParamSpec::string("language", "Language of the categories."),
            ParamSpec::boolean("detailed", "Should return detailed category information."),
            START,
            PAGE_LIMIT,
        ],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_like_toggle",
        description: "Toggle the user like of the given Quote as a user of the API Key.",
        method: HttpMethod::Get,
        path: "/quote/like/toggle",
        params: &[QUOTE_ID],
        shape: ResponseShape::GenericObject,
    },
    EndpointDescriptor {
        name: "get_quote_bookmark_toggle",
        description: "Toggle the user bookmark of the given Quote as a user of the API Key.",
        method: HttpMethod::Get,
        path: "/quote/bookmark/toggle",
        params: &[QUOTE_ID],
        shape: ResponseShape::GenericObject,
    },
];
