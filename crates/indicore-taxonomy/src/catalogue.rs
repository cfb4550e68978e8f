//! The built-in indicator type catalogue.
//!
//! One constructor function per indicator type; [`catalogue`] assembles the
//! full set in registration order. Nested attributes and associations are
//! owned copies: each parent carries its own duplicate of the referenced
//! definition, so editing one site never silently changes another.

use indicore_canonical::DataType;

use crate::definition::TypeDefinition;

/// Builds the full built-in catalogue in registration order. Callers
/// normally reach this through `Taxonomy::builtin()`, which validates the
/// graph invariants once per process.
pub fn catalogue() -> Vec<TypeDefinition> {
    vec![
        breach(),
        breach_date(),
        breach_count(),
        breach_description(),
        file(),
        file_data(),
        last_analysis(),
        adversary(),
        aso(),
        asn(),
        malware(),
        malware_family(),
        malware_type(),
        malware_sample(),
        object(),
        descriptor(),
        aba_rtn(),
        latitude(),
        longitude(),
        country(),
        cookie(),
        text(),
        value(),
        issuer(),
        password(),
        airport_name(),
        profile_photo(),
        authentihash(),
        bank_account_nr(),
        bic(),
        bin(),
        btc(),
        cc_number(),
        cdhash(),
        certificate_fingerprint(),
        chrome_extension_id(),
        cidr(),
        cpe(),
        cve(),
        dash(),
        dkim(),
        dkim_signature(),
        domain(),
        city(),
        issuing_country(),
        email_address(),
        email_body(),
        email_display_name(),
        email_header(),
        email_mime_boundary(),
        email_subject(),
        email_thread_index(),
        email_x_mailer(),
        email(),
        eppn(),
        facebook_profile(),
        ffn(),
        filename(),
        size_in_bytes(),
        filename_pattern(),
        flight(),
        gene(),
        github_organization(),
        github_repository(),
        github_user(),
        link(),
        datetime(),
        date(),
        date_of_issue(),
        expiration_date(),
        group(),
        hassh_md5(),
        hasshserver_md5(),
        hex(),
        base64(),
        hostname(),
        iban(),
        id_number(),
        ip(),
        ja3_fingerprint_md5(),
        jabber_id(),
        jarm_fingerprint(),
        mac_address(),
        md5(),
        mime_type(),
        mobile_app_id(),
        passport(),
        path(),
        pattern_in_file(),
        pattern_in_memory(),
        pattern_in_traffic(),
        pgp_private_key(),
        pgp_public_key(),
        phone(),
        pnr(),
        process(),
        process_state(),
        prtn(),
        redress_number(),
        regkey(),
        sha1(),
        sha224(),
        sha256(),
        sha384(),
        sha512(),
        sha3_224(),
        sha3_256(),
        sha3_384(),
        sha3_512(),
        sha512_224(),
        sha512_256(),
        ssh_fingerprint(),
        ssr(),
        category(),
        threat(),
        tiktok_profile(),
        twitter_profile(),
        url(),
        username(),
        visa(),
        whois_registrant(),
        whois_registrar(),
        windows_scheduled_task(),
        windows_service_displayname(),
        windows_service_name(),
        xmr(),
        x509_fingerprint_md5(),
        x509_fingerprint_sha1(),
        x509_fingerprint_sha256(),
        payload(),
    ]
}

fn breach() -> TypeDefinition {
    TypeDefinition::new(
        "breach",
        "Security breach that resulted in a leak of PII or SPII",
        DataType::Uuid,
    )
    .with_attributes(vec![
        domain(),
        link(),
        breach_date(),
        breach_count(),
        breach_description(),
    ])
}

fn breach_date() -> TypeDefinition {
    TypeDefinition::new("breach-date", "Day the breach occurred", DataType::Date)
}

fn breach_count() -> TypeDefinition {
    TypeDefinition::new(
        "breach-count",
        "Number of items leaked in the breach",
        DataType::Integer,
    )
}

fn breach_description() -> TypeDefinition {
    TypeDefinition::new(
        "breach-description",
        "Detailed description of the breach",
        DataType::Str,
    )
}

fn file() -> TypeDefinition {
    TypeDefinition::new(
        "file",
        "Object identifying a file, the value can be a UUID or a SHA3-256 or MD5 checksum",
        DataType::Object,
    )
    .with_attributes(vec![file_data(), sha1(), md5(), sha256(), sha3_256()])
    .with_associations(vec![filename(), filename_pattern()])
    .with_tags(&["malware", "common-file", "system-file"])
    .with_correlate(&["md5", "sha1", "sha256", "sha3-256", "file-data"])
}

fn file_data() -> TypeDefinition {
    TypeDefinition::new("file-data", "File or attachment URL", DataType::Url)
}

fn last_analysis() -> TypeDefinition {
    TypeDefinition::new(
        "last-analysis",
        "Time of last analysis. Format 2006-01-02T15:04:05.999999999Z",
        DataType::Datetime,
    )
}

fn adversary() -> TypeDefinition {
    TypeDefinition::new(
        "adversary",
        "Object identifying a threat actor",
        DataType::Adversary,
    )
}

fn aso() -> TypeDefinition {
    TypeDefinition::new("aso", "Autonomous System Organization", DataType::Istr)
}

fn asn() -> TypeDefinition {
    TypeDefinition::new(
        "asn",
        "Autonomous System Organization Number",
        DataType::Integer,
    )
}

fn malware() -> TypeDefinition {
    TypeDefinition::new("malware", "Malware", DataType::Istr)
        .with_attributes(vec![malware_family(), malware_type()])
        .with_correlate(&["malware-family", "malware-type"])
}

fn malware_family() -> TypeDefinition {
    TypeDefinition::new("malware-family", "Malware family", DataType::Istr)
}

fn malware_type() -> TypeDefinition {
    TypeDefinition::new("malware-type", "Malware type", DataType::Istr)
}

fn malware_sample() -> TypeDefinition {
    TypeDefinition::new("malware-sample", "Malware Sample URL", DataType::Url)
        .with_attributes(vec![malware(), file()])
}

fn object() -> TypeDefinition {
    TypeDefinition::new(
        "object",
        "Generic entity composed of other entities, the value can be a UUID or a SHA3-256 or MD5 checksum",
        DataType::Object,
    )
    .with_attributes(vec![descriptor()])
}

fn descriptor() -> TypeDefinition {
    TypeDefinition::new("descriptor", "The object descriptor", DataType::Istr)
}

fn aba_rtn() -> TypeDefinition {
    TypeDefinition::new("aba-rtn", "ABA routing transit number", DataType::Integer)
}

fn latitude() -> TypeDefinition {
    TypeDefinition::new("latitude", "GPS latitude", DataType::Float)
}

fn longitude() -> TypeDefinition {
    TypeDefinition::new("longitude", "GPS longitude", DataType::Float)
}

fn country() -> TypeDefinition {
    TypeDefinition::new("country", "Country name", DataType::Country)
}

fn cookie() -> TypeDefinition {
    TypeDefinition::new(
        "cookie",
        "HTTP cookie as often stored on the user web client. This can include authentication cookie or session cookie",
        DataType::Str,
    )
    .with_associations(vec![value()])
}

fn text() -> TypeDefinition {
    TypeDefinition::new("text", "Any case insensitive text value", DataType::Istr)
}

fn value() -> TypeDefinition {
    TypeDefinition::new("value", "Any case sensitive text value", DataType::Str)
}

fn issuer() -> TypeDefinition {
    TypeDefinition::new("issuer", "Issuer name", DataType::Istr)
}

fn password() -> TypeDefinition {
    TypeDefinition::new("password", "Password", DataType::Str)
}

fn airport_name() -> TypeDefinition {
    TypeDefinition::new("airport-name", "The airport name", DataType::Istr)
        .with_attributes(vec![country(), city()])
}

fn profile_photo() -> TypeDefinition {
    TypeDefinition::new("profile-photo", "Profile photo URL", DataType::Url)
}

fn authentihash() -> TypeDefinition {
    TypeDefinition::new(
        "authentihash",
        "Authenticode executable signature hash",
        DataType::Hexadecimal,
    )
}

fn bank_account_nr() -> TypeDefinition {
    TypeDefinition::new(
        "bank-account-nr",
        "Bank account number without any routing number",
        DataType::Integer,
    )
    .with_attributes(vec![bic(), bin()])
}

fn bic() -> TypeDefinition {
    TypeDefinition::new(
        "bic",
        "Bank Identifier Code Number also known as SWIFT-BIC, SWIFT code or ISO 9362 code",
        DataType::Istr,
    )
}

fn bin() -> TypeDefinition {
    TypeDefinition::new("bin", "Bank Identification Number", DataType::Integer)
}

fn btc() -> TypeDefinition {
    TypeDefinition::new("btc", "Bitcoin Address", DataType::Str)
}

fn cc_number() -> TypeDefinition {
    TypeDefinition::new("cc-number", "Credit-Card Number", DataType::Integer)
        .with_attributes(vec![issuer()])
}

fn cdhash() -> TypeDefinition {
    TypeDefinition::new(
        "cdhash",
        "An Apple Code Directory Hash, identifying a code-signed Mach-O executable file",
        DataType::Hexadecimal,
    )
}

fn certificate_fingerprint() -> TypeDefinition {
    TypeDefinition::new(
        "certificate-fingerprint",
        "The fingerprint of a SSL/TLS certificate",
        DataType::Hexadecimal,
    )
}

fn chrome_extension_id() -> TypeDefinition {
    TypeDefinition::new("chrome-extension-id", "Chrome extension ID", DataType::Str)
}

fn cidr() -> TypeDefinition {
    TypeDefinition::new("cidr", "A public network segment", DataType::Cidr).with_attributes(vec![
        country(),
        city(),
        latitude(),
        longitude(),
        asn(),
        aso(),
    ])
}

fn cpe() -> TypeDefinition {
    TypeDefinition::new(
        "cpe",
        "Common Platform Enumeration. Structured naming scheme for information technology systems, software, and packages",
        DataType::Istr,
    )
}

fn cve() -> TypeDefinition {
    TypeDefinition::new("cve", "", DataType::Istr)
}

fn dash() -> TypeDefinition {
    TypeDefinition::new("dash", "Dash address", DataType::Str)
}

fn dkim() -> TypeDefinition {
    TypeDefinition::new("dkim", "DKIM public key", DataType::Str)
}

fn dkim_signature() -> TypeDefinition {
    TypeDefinition::new("dkim-signature", "DKIM signature", DataType::Str)
}

fn domain() -> TypeDefinition {
    TypeDefinition::new("domain", "Internet domain", DataType::Fqdn)
        .with_attributes(vec![whois_registrant(), whois_registrar()])
}

fn city() -> TypeDefinition {
    TypeDefinition::new("city", "City name", DataType::City)
}

fn issuing_country() -> TypeDefinition {
    TypeDefinition::new("issuing-country", "Issuing country name", DataType::Country)
}

fn email_address() -> TypeDefinition {
    TypeDefinition::new("email-address", "Sender email address", DataType::Email)
}

fn email_body() -> TypeDefinition {
    TypeDefinition::new("email-body", "Email body", DataType::Istr)
}

fn email_display_name() -> TypeDefinition {
    TypeDefinition::new("email-display-name", "Sender display name", DataType::Istr)
}

fn email_header() -> TypeDefinition {
    TypeDefinition::new("email-header", "Email header (all headers)", DataType::Str)
}

fn email_mime_boundary() -> TypeDefinition {
    TypeDefinition::new(
        "email-mime-boundary",
        "MIME boundaries are strings of 7-bit US-ASCII text that define the boundaries between message parts in a MIME message. MIME boundaries are declared in a Content-Type message header for any message that encapsulates more than one message part and in part headers for those parts that encapsulate nested parts.",
        DataType::Str,
    )
}

fn email_subject() -> TypeDefinition {
    TypeDefinition::new("email-subject", "The subject of the email", DataType::Istr)
}

fn email_thread_index() -> TypeDefinition {
    TypeDefinition::new(
        "email-thread-index",
        "The email thread index",
        DataType::Base64,
    )
}

fn email_x_mailer() -> TypeDefinition {
    TypeDefinition::new("email-x-mailer", "Email x-mailer header", DataType::Istr)
}

fn email() -> TypeDefinition {
    TypeDefinition::new("email", "Email Message ID", DataType::Str)
        .with_attributes(vec![
            email_body(),
            email_display_name(),
            email_header(),
            email_address(),
            email_subject(),
        ])
        .with_associations(vec![file()])
}

fn eppn() -> TypeDefinition {
    TypeDefinition::new(
        "eppn",
        "The NetId of the person for the purposes of inter-institutional authentication. Should be stored in the form of user@univ.edu, where univ.edu is the name of the local security domain",
        DataType::Email,
    )
}

fn facebook_profile() -> TypeDefinition {
    TypeDefinition::new("facebook-profile", "Facebook profile", DataType::Url)
}

fn ffn() -> TypeDefinition {
    TypeDefinition::new(
        "ffn",
        "The frequent flyer number of a passanger",
        DataType::Str,
    )
}

fn filename() -> TypeDefinition {
    TypeDefinition::new(
        "filename",
        "A filename or email attachment name",
        DataType::Istr,
    )
}

fn size_in_bytes() -> TypeDefinition {
    TypeDefinition::new(
        "size-in-bytes",
        "The size in bytes of an element",
        DataType::Float,
    )
}

fn filename_pattern() -> TypeDefinition {
    TypeDefinition::new(
        "filename-pattern",
        "A pattern in the name of a file",
        DataType::Str,
    )
}

fn flight() -> TypeDefinition {
    TypeDefinition::new("flight", "A flight number", DataType::Str)
}

fn gene() -> TypeDefinition {
    TypeDefinition::new("gene", "Go Evtx sigNature Engine", DataType::Str)
}

fn github_organization() -> TypeDefinition {
    TypeDefinition::new("github-organization", "Github organization", DataType::Url)
}

fn github_repository() -> TypeDefinition {
    TypeDefinition::new("github-repository", "Github repository", DataType::Url)
}

fn github_user() -> TypeDefinition {
    TypeDefinition::new("github-user", "Github user", DataType::Url)
}

fn link() -> TypeDefinition {
    TypeDefinition::new("link", "External link for reference", DataType::Url)
}

fn datetime() -> TypeDefinition {
    TypeDefinition::new(
        "datetime",
        "Time with nanoseconds in the format 2006-01-02T15:04:05.999999999Z07:00",
        DataType::Datetime,
    )
}

fn date() -> TypeDefinition {
    TypeDefinition::new("date", "Date in format 2006-01-02", DataType::Date)
}

fn date_of_issue() -> TypeDefinition {
    TypeDefinition::new("date-of-issue", "Date in format 2006-01-02", DataType::Date)
}

fn expiration_date() -> TypeDefinition {
    TypeDefinition::new(
        "expiration-date",
        "Date in format 2006-01-02",
        DataType::Date,
    )
}

fn group() -> TypeDefinition {
    TypeDefinition::new("group", "Adversaries group", DataType::Istr)
}

fn hassh_md5() -> TypeDefinition {
    TypeDefinition::new(
        "hassh-md5",
        "Network fingerprinting standard which can be used to identify specific Client SSH implementations. The fingerprints can be easily stored, searched and shared in the form of an MD5 fingerprint",
        DataType::Md5,
    )
}

fn hasshserver_md5() -> TypeDefinition {
    TypeDefinition::new(
        "hasshserver-md5",
        "Network fingerprinting standard which can be used to identify specific Server SSH implementations. The fingerprints can be easily stored, searched and shared in the form of an MD5 fingerprint",
        DataType::Md5,
    )
}

fn hex() -> TypeDefinition {
    TypeDefinition::new("hex", "A value in hexadecimal", DataType::Hexadecimal)
}

fn base64() -> TypeDefinition {
    TypeDefinition::new("base64", "A value in BASE64 format", DataType::Base64)
}

fn hostname() -> TypeDefinition {
    TypeDefinition::new(
        "hostname",
        "A full host/dnsname of an attacker",
        DataType::Fqdn,
    )
}

fn iban() -> TypeDefinition {
    TypeDefinition::new("iban", "International Bank Account Number", DataType::Istr)
}

fn id_number() -> TypeDefinition {
    TypeDefinition::new(
        "id-number",
        "It can be an ID card, residence permit, etc.",
        DataType::Str,
    )
    .with_attributes(vec![issuer(), date_of_issue(), expiration_date()])
}

fn ip() -> TypeDefinition {
    TypeDefinition::new("ip", "IP Address", DataType::Ip).with_attributes(vec![cidr()])
}

fn ja3_fingerprint_md5() -> TypeDefinition {
    TypeDefinition::new(
        "ja3-fingerprint-md5",
        "JA3 is a method for creating SSL/TLS client fingerprints that should be easy to produce on any platform and can be easily shared for threat intelligence",
        DataType::Md5,
    )
}

fn jabber_id() -> TypeDefinition {
    TypeDefinition::new("jabber-id", "Jabber ID", DataType::Email)
}

fn jarm_fingerprint() -> TypeDefinition {
    TypeDefinition::new(
        "jarm-fingerprint",
        "JARM is a method for creating SSL/TLS server fingerprints",
        DataType::Hexadecimal,
    )
}

fn mac_address() -> TypeDefinition {
    TypeDefinition::new(
        "mac-address",
        "Network interface hardware address",
        DataType::Mac,
    )
}

fn md5() -> TypeDefinition {
    TypeDefinition::new("md5", "Hash MD5", DataType::Md5)
}

fn mime_type() -> TypeDefinition {
    TypeDefinition::new(
        "mime-type",
        "A media type (also MIME type and content type) is a two-part identifier",
        DataType::Mime,
    )
}

fn mobile_app_id() -> TypeDefinition {
    TypeDefinition::new(
        "mobile-app-id",
        "The ID of a mobile application",
        DataType::Str,
    )
}

fn passport() -> TypeDefinition {
    TypeDefinition::new("passport", "Passport number", DataType::Str).with_attributes(vec![
        issuing_country(),
        issuer(),
        date_of_issue(),
        expiration_date(),
    ])
}

fn path() -> TypeDefinition {
    TypeDefinition::new(
        "path",
        "Path to a file, folder or process, also a HTTP request path",
        DataType::Path,
    )
}

fn pattern_in_file() -> TypeDefinition {
    TypeDefinition::new("pattern-in-file", "Pattern inside a file", DataType::Str)
}

fn pattern_in_memory() -> TypeDefinition {
    TypeDefinition::new("pattern-in-memory", "Pattern in memory", DataType::Str)
}

fn pattern_in_traffic() -> TypeDefinition {
    TypeDefinition::new("pattern-in-traffic", "Pattern in traffic", DataType::Str)
}

fn pgp_private_key() -> TypeDefinition {
    TypeDefinition::new("pgp-private-key", "PGP private key", DataType::Str)
}

fn pgp_public_key() -> TypeDefinition {
    TypeDefinition::new("pgp-public-key", "PGP public key", DataType::Str)
}

fn phone() -> TypeDefinition {
    TypeDefinition::new("phone", "Phone number", DataType::Phone)
}

fn pnr() -> TypeDefinition {
    TypeDefinition::new(
        "pnr",
        "The Passenger Name Record Locator is a key under which the reservation for a trip is stored in the system. The PNR contains, among other data, the name, flight segments and address of the passenger. It is defined by a combination of five or six letters and numbers",
        DataType::Str,
    )
}

fn process() -> TypeDefinition {
    TypeDefinition::new("process", "A running process", DataType::Istr)
        .with_attributes(vec![process_state()])
}

fn process_state() -> TypeDefinition {
    TypeDefinition::new("process-state", "State of a process", DataType::Istr)
}

fn prtn() -> TypeDefinition {
    TypeDefinition::new("prtn", "Premium-rate telephone number", DataType::Istr)
}

fn redress_number() -> TypeDefinition {
    TypeDefinition::new(
        "redress-number",
        "The Redress Control Number is the record identifier for people who apply for redress through the DHS Travel Redress Inquiry Program (DHS TRIP). DHS TRIP is for travelers who have been repeatedly identified for additional screening and who want to file an inquiry to have erroneous information corrected in DHS systems",
        DataType::Str,
    )
}

fn regkey() -> TypeDefinition {
    TypeDefinition::new("regkey", "Registry key", DataType::Istr)
}

fn sha1() -> TypeDefinition {
    TypeDefinition::new("sha1", "Hash SHA1", DataType::Sha1)
}

fn sha224() -> TypeDefinition {
    TypeDefinition::new("sha224", "Hash SHA224", DataType::Sha224)
}

fn sha256() -> TypeDefinition {
    TypeDefinition::new("sha256", "Hash SHA256", DataType::Sha256)
}

fn sha384() -> TypeDefinition {
    TypeDefinition::new("sha384", "Hash SHA384", DataType::Sha384)
}

fn sha512() -> TypeDefinition {
    TypeDefinition::new("sha512", "Hash SHA512", DataType::Sha512)
}

fn sha3_224() -> TypeDefinition {
    TypeDefinition::new("sha3-224", "Hash SHA3-224", DataType::Sha3_224)
}

fn sha3_256() -> TypeDefinition {
    TypeDefinition::new("sha3-256", "Hash SHA3-256", DataType::Sha3_256)
}

fn sha3_384() -> TypeDefinition {
    TypeDefinition::new("sha3-384", "Hash SHA3-384", DataType::Sha3_384)
}

fn sha3_512() -> TypeDefinition {
    TypeDefinition::new("sha3-512", "Hash SHA3-512", DataType::Sha3_512)
}

fn sha512_224() -> TypeDefinition {
    TypeDefinition::new("sha512-224", "Hash SHA512-224", DataType::Sha512_224)
}

fn sha512_256() -> TypeDefinition {
    TypeDefinition::new("sha512-256", "Hash SHA512-256", DataType::Sha512_256)
}

fn ssh_fingerprint() -> TypeDefinition {
    TypeDefinition::new(
        "ssh-fingerprint",
        "A fingerprint of SSH key material",
        DataType::Str,
    )
}

fn ssr() -> TypeDefinition {
    TypeDefinition::new(
        "ssr",
        "A Special Service Request is a function to an airline to provide a particular facility for A Passenger or passengers",
        DataType::Str,
    )
}

fn category() -> TypeDefinition {
    TypeDefinition::new("category", "A category", DataType::Istr)
}

fn threat() -> TypeDefinition {
    TypeDefinition::new("threat", "A cybersecurity threat", DataType::Istr)
}

fn tiktok_profile() -> TypeDefinition {
    TypeDefinition::new("tiktok-profile", "TikTok user profile", DataType::Url)
}

fn twitter_profile() -> TypeDefinition {
    TypeDefinition::new("twitter-profile", "A Twitter user profile", DataType::Url)
}

fn url() -> TypeDefinition {
    TypeDefinition::new("url", "URL", DataType::Url)
}

fn username() -> TypeDefinition {
    TypeDefinition::new("username", "Username", DataType::Istr)
}

fn visa() -> TypeDefinition {
    TypeDefinition::new("visa", "Visa number", DataType::Str)
}

fn whois_registrant() -> TypeDefinition {
    TypeDefinition::new("whois-registrant", "Who is registrant", DataType::Istr)
}

fn whois_registrar() -> TypeDefinition {
    TypeDefinition::new("whois-registrar", "whois-registrar", DataType::Istr)
}

fn windows_scheduled_task() -> TypeDefinition {
    TypeDefinition::new(
        "windows-scheduled-task",
        "A Windows scheduled task",
        DataType::Istr,
    )
}

fn windows_service_displayname() -> TypeDefinition {
    TypeDefinition::new(
        "windows-service-displayname",
        "A windows service’s displayname, not to be confused with the windows-service-name. This is the name that applications will generally display as the service’s name in applications",
        DataType::Istr,
    )
}

fn windows_service_name() -> TypeDefinition {
    TypeDefinition::new(
        "windows-service-name",
        "A windows service name. This is the name used internally by windows. Not to be confused with the windows-service-displayname",
        DataType::Istr,
    )
}

fn xmr() -> TypeDefinition {
    TypeDefinition::new("xmr", "Monero address", DataType::Str)
}

fn x509_fingerprint_md5() -> TypeDefinition {
    TypeDefinition::new(
        "x509-fingerprint-md5",
        "X509 fingerprint in MD5",
        DataType::Md5,
    )
}

fn x509_fingerprint_sha1() -> TypeDefinition {
    TypeDefinition::new(
        "x509-fingerprint-sha1",
        "X509 fingerprint in SHA1",
        DataType::Sha1,
    )
}

fn x509_fingerprint_sha256() -> TypeDefinition {
    TypeDefinition::new(
        "x509-fingerprint-sha256",
        "X509 fingerprint in SHA256",
        DataType::Sha256,
    )
}

fn payload() -> TypeDefinition {
    TypeDefinition::new(
        "payload",
        "SHA3-256 of a message sent in a network packet",
        DataType::Sha3_256,
    )
    .with_attributes(vec![sha1(), md5(), sha256(), sha3_256()])
}
