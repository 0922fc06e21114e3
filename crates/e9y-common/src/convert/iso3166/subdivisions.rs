//! ISO-3166-2 subdivisions, generated from the `iso-codes` database.

use super::{sub, Subdivision};

pub const SUBDIVISIONS: &[Subdivision] = &[
    // Andorra
    sub("AD-02", "Canillo"),
    sub("AD-03", "Encamp"),
    sub("AD-04", "La Massana"),
    sub("AD-05", "Ordino"),
    sub("AD-06", "Sant Julià de Lòria"),
    sub("AD-07", "Andorra la Vella"),
    sub("AD-08", "Escaldes-Engordany"),
    // United Arab Emirates
    sub("AE-AJ", "‘Ajmān"),
    sub("AE-AZ", "Abū Z̧aby"),
    sub("AE-DU", "Dubayy"),
    sub("AE-FU", "Al Fujayrah"),
    sub("AE-RK", "Ra’s al Khaymah"),
    sub("AE-SH", "Ash Shāriqah"),
    sub("AE-UQ", "Umm al Qaywayn"),
    // Afghanistan
    sub("AF-BAL", "Balkh"),
    sub("AF-BAM", "Bāmyān"),
    sub("AF-BDG", "Bādghīs"),
    sub("AF-BDS", "Badakhshān"),
    sub("AF-BGL", "Baghlān"),
    sub("AF-DAY", "Dāykundī"),
    sub("AF-FRA", "Farāh"),
    sub("AF-FYB", "Fāryāb"),
    sub("AF-GHA", "Ghaznī"),
    sub("AF-GHO", "Ghōr"),
    sub("AF-HEL", "Helmand"),
    sub("AF-HER", "Herāt"),
    sub("AF-JOW", "Jowzjān"),
    sub("AF-KAB", "Kābul"),
    sub("AF-KAN", "Kandahār"),
    sub("AF-KAP", "Kāpīsā"),
    sub("AF-KDZ", "Kunduz"),
    sub("AF-KHO", "Khōst"),
    sub("AF-KNR", "Kunaṟ"),
    sub("AF-LAG", "Laghmān"),
    sub("AF-LOG", "Lōgar"),
    sub("AF-NAN", "Nangarhār"),
    sub("AF-NIM", "Nīmrōz"),
    sub("AF-NUR", "Nūristān"),
    sub("AF-PAN", "Panjshayr"),
    sub("AF-PAR", "Parwān"),
    sub("AF-PIA", "Paktiyā"),
    sub("AF-PKA", "Paktīkā"),
    sub("AF-SAM", "Samangān"),
    sub("AF-SAR", "Sar-e Pul"),
    sub("AF-TAK", "Takhār"),
    sub("AF-URU", "Uruzgān"),
    sub("AF-WAR", "Wardak"),
    sub("AF-ZAB", "Zābul"),
    // Antigua and Barbuda
    sub("AG-03", "Saint George"),
    sub("AG-04", "Saint John"),
    sub("AG-05", "Saint Mary"),
    sub("AG-06", "Saint Paul"),
    sub("AG-07", "Saint Peter"),
    sub("AG-08", "Saint Philip"),
    sub("AG-10", "Barbuda"),
    sub("AG-11", "Redonda"),
    // Albania
    sub("AL-01", "Berat"),
    sub("AL-02", "Durrës"),
    sub("AL-03", "Elbasan"),
    sub("AL-04", "Fier"),
    sub("AL-05", "Gjirokastër"),
    sub("AL-06", "Korçë"),
    sub("AL-07", "Kukës"),
    sub("AL-08", "Lezhë"),
    sub("AL-09", "Dibër"),
    sub("AL-10", "Shkodër"),
    sub("AL-11", "Tiranë"),
    sub("AL-12", "Vlorë"),
    // Armenia
    sub("AM-AG", "Aragac̣otn"),
    sub("AM-AR", "Ararat"),
    sub("AM-AV", "Armavir"),
    sub("AM-ER", "Erevan"),
    sub("AM-GR", "Geġark'unik'"),
    sub("AM-KT", "Kotayk'"),
    sub("AM-LO", "Loṙi"),
    sub("AM-SH", "Širak"),
    sub("AM-SU", "Syunik'"),
    sub("AM-TV", "Tavuš"),
    sub("AM-VD", "Vayoć Jor"),
    // Angola
    sub("AO-BGO", "Bengo"),
    sub("AO-BGU", "Benguela"),
    sub("AO-BIE", "Bié"),
    sub("AO-CAB", "Cabinda"),
    sub("AO-CCU", "Cuando Cubango"),
    sub("AO-CNN", "Cunene"),
    sub("AO-CNO", "Cuanza-Norte"),
    sub("AO-CUS", "Cuanza-Sul"),
    sub("AO-HUA", "Huambo"),
    sub("AO-HUI", "Huíla"),
    sub("AO-LNO", "Lunda-Norte"),
    sub("AO-LSU", "Lunda-Sul"),
    sub("AO-LUA", "Luanda"),
    sub("AO-MAL", "Malange"),
    sub("AO-MOX", "Moxico"),
    sub("AO-NAM", "Namibe"),
    sub("AO-UIG", "Uíge"),
    sub("AO-ZAI", "Zaire"),
    // Argentina
    sub("AR-A", "Salta"),
    sub("AR-B", "Buenos Aires"),
    sub("AR-C", "Ciudad Autónoma de Buenos Aires"),
    sub("AR-D", "San Luis"),
    sub("AR-E", "Entre Ríos"),
    sub("AR-F", "La Rioja"),
    sub("AR-G", "Santiago del Estero"),
    sub("AR-H", "Chaco"),
    sub("AR-J", "San Juan"),
    sub("AR-K", "Catamarca"),
    sub("AR-L", "La Pampa"),
    sub("AR-M", "Mendoza"),
    sub("AR-N", "Misiones"),
    sub("AR-P", "Formosa"),
    sub("AR-Q", "Neuquén"),
    sub("AR-R", "Río Negro"),
    sub("AR-S", "Santa Fe"),
    sub("AR-T", "Tucumán"),
    sub("AR-U", "Chubut"),
    sub("AR-V", "Tierra del Fuego"),
    sub("AR-W", "Corrientes"),
    sub("AR-X", "Córdoba"),
    sub("AR-Y", "Jujuy"),
    sub("AR-Z", "Santa Cruz"),
    // Austria
    sub("AT-1", "Burgenland"),
    sub("AT-2", "Kärnten"),
    sub("AT-3", "Niederösterreich"),
    sub("AT-4", "Oberösterreich"),
    sub("AT-5", "Salzburg"),
    sub("AT-6", "Steiermark"),
    sub("AT-7", "Tirol"),
    sub("AT-8", "Vorarlberg"),
    sub("AT-9", "Wien"),
    // Australia
    sub("AU-ACT", "Australian Capital Territory"),
    sub("AU-NSW", "New South Wales"),
    sub("AU-NT", "Northern Territory"),
    sub("AU-QLD", "Queensland"),
    sub("AU-SA", "South Australia"),
    sub("AU-TAS", "Tasmania"),
    sub("AU-VIC", "Victoria"),
    sub("AU-WA", "Western Australia"),
    // Azerbaijan
    sub("AZ-ABS", "Abşeron"),
    sub("AZ-AGA", "Ağstafa"),
    sub("AZ-AGC", "Ağcabədi"),
    sub("AZ-AGM", "Ağdam"),
    sub("AZ-AGS", "Ağdaş"),
    sub("AZ-AGU", "Ağsu"),
    sub("AZ-AST", "Astara"),
    sub("AZ-BA", "Bakı"),
    sub("AZ-BAB", "Babək"),
    sub("AZ-BAL", "Balakən"),
    sub("AZ-BAR", "Bərdə"),
    sub("AZ-BEY", "Beyləqan"),
    sub("AZ-BIL", "Biləsuvar"),
    sub("AZ-CAB", "Cəbrayıl"),
    sub("AZ-CAL", "Cəlilabad"),
    sub("AZ-CUL", "Culfa"),
    sub("AZ-DAS", "Daşkəsən"),
    sub("AZ-FUZ", "Füzuli"),
    sub("AZ-GA", "Gəncə"),
    sub("AZ-GAD", "Gədəbəy"),
    sub("AZ-GOR", "Goranboy"),
    sub("AZ-GOY", "Göyçay"),
    sub("AZ-GYG", "Göygöl"),
    sub("AZ-HAC", "Hacıqabul"),
    sub("AZ-IMI", "İmişli"),
    sub("AZ-ISM", "İsmayıllı"),
    sub("AZ-KAL", "Kəlbəcər"),
    sub("AZ-KAN", "Kǝngǝrli"),
    sub("AZ-KUR", "Kürdəmir"),
    sub("AZ-LA", "Lənkəran"),
    sub("AZ-LAC", "Laçın"),
    sub("AZ-LAN", "Lənkəran"),
    sub("AZ-LER", "Lerik"),
    sub("AZ-MAS", "Masallı"),
    sub("AZ-MI", "Mingəçevir"),
    sub("AZ-NA", "Naftalan"),
    sub("AZ-NEF", "Neftçala"),
    sub("AZ-NV", "Naxçıvan"),
    sub("AZ-NX", "Naxçıvan"),
    sub("AZ-OGU", "Oğuz"),
    sub("AZ-ORD", "Ordubad"),
    sub("AZ-QAB", "Qəbələ"),
    sub("AZ-QAX", "Qax"),
    sub("AZ-QAZ", "Qazax"),
    sub("AZ-QBA", "Quba"),
    sub("AZ-QBI", "Qubadlı"),
    sub("AZ-QOB", "Qobustan"),
    sub("AZ-QUS", "Qusar"),
    sub("AZ-SA", "Şəki"),
    sub("AZ-SAB", "Sabirabad"),
    sub("AZ-SAD", "Sədərək"),
    sub("AZ-SAH", "Şahbuz"),
    sub("AZ-SAK", "Şəki"),
    sub("AZ-SAL", "Salyan"),
    sub("AZ-SAR", "Şərur"),
    sub("AZ-SAT", "Saatlı"),
    sub("AZ-SBN", "Şabran"),
    sub("AZ-SIY", "Siyəzən"),
    sub("AZ-SKR", "Şəmkir"),
    sub("AZ-SM", "Sumqayıt"),
    sub("AZ-SMI", "Şamaxı"),
    sub("AZ-SMX", "Samux"),
    sub("AZ-SR", "Şirvan"),
    sub("AZ-SUS", "Şuşa"),
    sub("AZ-TAR", "Tərtər"),
    sub("AZ-TOV", "Tovuz"),
    sub("AZ-UCA", "Ucar"),
    sub("AZ-XA", "Xankəndi"),
    sub("AZ-XAC", "Xaçmaz"),
    sub("AZ-XCI", "Xocalı"),
    sub("AZ-XIZ", "Xızı"),
    sub("AZ-XVD", "Xocavənd"),
    sub("AZ-YAR", "Yardımlı"),
    sub("AZ-YE", "Yevlax"),
    sub("AZ-YEV", "Yevlax"),
    sub("AZ-ZAN", "Zəngilan"),
    sub("AZ-ZAQ", "Zaqatala"),
    sub("AZ-ZAR", "Zərdab"),
    // Bosnia and Herzegovina
    sub("BA-BIH", "Federacija Bosne i Hercegovine"),
    sub("BA-BRC", "Brčko distrikt"),
    sub("BA-SRP", "Republika Srpska"),
    // Barbados
    sub("BB-01", "Christ Church"),
    sub("BB-02", "Saint Andrew"),
    sub("BB-03", "Saint George"),
    sub("BB-04", "Saint James"),
    sub("BB-05", "Saint John"),
    sub("BB-06", "Saint Joseph"),
    sub("BB-07", "Saint Lucy"),
    sub("BB-08", "Saint Michael"),
    sub("BB-09", "Saint Peter"),
    sub("BB-10", "Saint Philip"),
    sub("BB-11", "Saint Thomas"),
    // Bangladesh
    sub("BD-01", "Bandarban"),
    sub("BD-02", "Barguna"),
    sub("BD-03", "Bogura"),
    sub("BD-04", "Brahmanbaria"),
    sub("BD-05", "Bagerhat"),
    sub("BD-06", "Barishal"),
    sub("BD-07", "Bhola"),
    sub("BD-08", "Cumilla"),
    sub("BD-09", "Chandpur"),
    sub("BD-10", "Chattogram"),
    sub("BD-11", "Cox's Bazar"),
    sub("BD-12", "Chuadanga"),
    sub("BD-13", "Dhaka"),
    sub("BD-14", "Dinajpur"),
    sub("BD-15", "Faridpur"),
    sub("BD-16", "Feni"),
    sub("BD-17", "Gopalganj"),
    sub("BD-18", "Gazipur"),
    sub("BD-19", "Gaibandha"),
    sub("BD-20", "Habiganj"),
    sub("BD-21", "Jamalpur"),
    sub("BD-22", "Jashore"),
    sub("BD-23", "Jhenaidah"),
    sub("BD-24", "Joypurhat"),
    sub("BD-25", "Jhalakathi"),
    sub("BD-26", "Kishoreganj"),
    sub("BD-27", "Khulna"),
    sub("BD-28", "Kurigram"),
    sub("BD-29", "Khagrachhari"),
    sub("BD-30", "Kushtia"),
    sub("BD-31", "Lakshmipur"),
    sub("BD-32", "Lalmonirhat"),
    sub("BD-33", "Manikganj"),
    sub("BD-34", "Mymensingh"),
    sub("BD-35", "Munshiganj"),
    sub("BD-36", "Madaripur"),
    sub("BD-37", "Magura"),
    sub("BD-38", "Moulvibazar"),
    sub("BD-39", "Meherpur"),
    sub("BD-40", "Narayanganj"),
    sub("BD-41", "Netrakona"),
    sub("BD-42", "Narsingdi"),
    sub("BD-43", "Narail"),
    sub("BD-44", "Natore"),
    sub("BD-45", "Chapai Nawabganj"),
    sub("BD-46", "Nilphamari"),
    sub("BD-47", "Noakhali"),
    sub("BD-48", "Naogaon"),
    sub("BD-49", "Pabna"),
    sub("BD-50", "Pirojpur"),
    sub("BD-51", "Patuakhali"),
    sub("BD-52", "Panchagarh"),
    sub("BD-53", "Rajbari"),
    sub("BD-54", "Rajshahi"),
    sub("BD-55", "Rangpur"),
    sub("BD-56", "Rangamati"),
    sub("BD-57", "Sherpur"),
    sub("BD-58", "Satkhira"),
    sub("BD-59", "Sirajganj"),
    sub("BD-60", "Sylhet"),
    sub("BD-61", "Sunamganj"),
    sub("BD-62", "Shariatpur"),
    sub("BD-63", "Tangail"),
    sub("BD-64", "Thakurgaon"),
    sub("BD-A", "Barishal"),
    sub("BD-B", "Chattogram"),
    sub("BD-C", "Dhaka"),
    sub("BD-D", "Khulna"),
    sub("BD-E", "Rajshahi"),
    sub("BD-F", "Rangpur"),
    sub("BD-G", "Sylhet"),
    sub("BD-H", "Mymensingh"),
    // Belgium
    sub("BE-BRU", "Brussels Hoofdstedelijk Gewest"),
    sub("BE-VAN", "Antwerpen"),
    sub("BE-VBR", "Vlaams-Brabant"),
    sub("BE-VLG", "Vlaams Gewest"),
    sub("BE-VLI", "Limburg"),
    sub("BE-VOV", "Oost-Vlaanderen"),
    sub("BE-VWV", "West-Vlaanderen"),
    sub("BE-WAL", "wallonne, Région"),
    sub("BE-WBR", "Brabant wallon"),
    sub("BE-WHT", "Hainaut"),
    sub("BE-WLG", "Liège"),
    sub("BE-WLX", "Luxembourg"),
    sub("BE-WNA", "Namur"),
    // Burkina Faso
    sub("BF-01", "Boucle du Mouhoun"),
    sub("BF-02", "Cascades"),
    sub("BF-03", "Centre"),
    sub("BF-04", "Centre-Est"),
    sub("BF-05", "Centre-Nord"),
    sub("BF-06", "Centre-Ouest"),
    sub("BF-07", "Centre-Sud"),
    sub("BF-08", "Est"),
    sub("BF-09", "Hauts-Bassins"),
    sub("BF-10", "Nord"),
    sub("BF-11", "Plateau-Central"),
    sub("BF-12", "Sahel"),
    sub("BF-13", "Sud-Ouest"),
    sub("BF-BAL", "Balé"),
    sub("BF-BAM", "Bam"),
    sub("BF-BAN", "Banwa"),
    sub("BF-BAZ", "Bazèga"),
    sub("BF-BGR", "Bougouriba"),
    sub("BF-BLG", "Boulgou"),
    sub("BF-BLK", "Boulkiemdé"),
    sub("BF-COM", "Comoé"),
    sub("BF-GAN", "Ganzourgou"),
    sub("BF-GNA", "Gnagna"),
    sub("BF-GOU", "Gourma"),
    sub("BF-HOU", "Houet"),
    sub("BF-IOB", "Ioba"),
    sub("BF-KAD", "Kadiogo"),
    sub("BF-KEN", "Kénédougou"),
    sub("BF-KMD", "Komondjari"),
    sub("BF-KMP", "Kompienga"),
    sub("BF-KOP", "Koulpélogo"),
    sub("BF-KOS", "Kossi"),
    sub("BF-KOT", "Kouritenga"),
    sub("BF-KOW", "Kourwéogo"),
    sub("BF-LER", "Léraba"),
    sub("BF-LOR", "Loroum"),
    sub("BF-MOU", "Mouhoun"),
    sub("BF-NAM", "Namentenga"),
    sub("BF-NAO", "Nahouri"),
    sub("BF-NAY", "Nayala"),
    sub("BF-NOU", "Noumbiel"),
    sub("BF-OUB", "Oubritenga"),
    sub("BF-OUD", "Oudalan"),
    sub("BF-PAS", "Passoré"),
    sub("BF-PON", "Poni"),
    sub("BF-SEN", "Séno"),
    sub("BF-SIS", "Sissili"),
    sub("BF-SMT", "Sanmatenga"),
    sub("BF-SNG", "Sanguié"),
    sub("BF-SOM", "Soum"),
    sub("BF-SOR", "Sourou"),
    sub("BF-TAP", "Tapoa"),
    sub("BF-TUI", "Tuy"),
    sub("BF-YAG", "Yagha"),
    sub("BF-YAT", "Yatenga"),
    sub("BF-ZIR", "Ziro"),
    sub("BF-ZON", "Zondoma"),
    sub("BF-ZOU", "Zoundwéogo"),
    // Bulgaria
    sub("BG-01", "Blagoevgrad"),
    sub("BG-02", "Burgas"),
    sub("BG-03", "Varna"),
    sub("BG-04", "Veliko Tarnovo"),
    sub("BG-05", "Vidin"),
    sub("BG-06", "Vratsa"),
    sub("BG-07", "Gabrovo"),
    sub("BG-08", "Dobrich"),
    sub("BG-09", "Kardzhali"),
    sub("BG-10", "Kyustendil"),
    sub("BG-11", "Lovech"),
    sub("BG-12", "Montana"),
    sub("BG-13", "Pazardzhik"),
    sub("BG-14", "Pernik"),
    sub("BG-15", "Pleven"),
    sub("BG-16", "Plovdiv"),
    sub("BG-17", "Razgrad"),
    sub("BG-18", "Ruse"),
    sub("BG-19", "Silistra"),
    sub("BG-20", "Sliven"),
    sub("BG-21", "Smolyan"),
    sub("BG-22", "Sofia (stolitsa)"),
    sub("BG-23", "Sofia"),
    sub("BG-24", "Stara Zagora"),
    sub("BG-25", "Targovishte"),
    sub("BG-26", "Haskovo"),
    sub("BG-27", "Shumen"),
    sub("BG-28", "Yambol"),
    // Bahrain
    sub("BH-13", "Al ‘Āşimah"),
    sub("BH-14", "Al Janūbīyah"),
    sub("BH-15", "Al Muḩarraq"),
    sub("BH-17", "Ash Shamālīyah"),
    // Burundi
    sub("BI-BB", "Bubanza"),
    sub("BI-BL", "Bujumbura Rural"),
    sub("BI-BM", "Bujumbura Mairie"),
    sub("BI-BR", "Bururi"),
    sub("BI-CA", "Cankuzo"),
    sub("BI-CI", "Cibitoke"),
    sub("BI-GI", "Gitega"),
    sub("BI-KI", "Kirundo"),
    sub("BI-KR", "Karuzi"),
    sub("BI-KY", "Kayanza"),
    sub("BI-MA", "Makamba"),
    sub("BI-MU", "Muramvya"),
    sub("BI-MW", "Mwaro"),
    sub("BI-MY", "Muyinga"),
    sub("BI-NG", "Ngozi"),
    sub("BI-RM", "Rumonge"),
    sub("BI-RT", "Rutana"),
    sub("BI-RY", "Ruyigi"),
    // Benin
    sub("BJ-AK", "Atacora"),
    sub("BJ-AL", "Alibori"),
    sub("BJ-AQ", "Atlantique"),
    sub("BJ-BO", "Borgou"),
    sub("BJ-CO", "Collines"),
    sub("BJ-DO", "Donga"),
    sub("BJ-KO", "Couffo"),
    sub("BJ-LI", "Littoral"),
    sub("BJ-MO", "Mono"),
    sub("BJ-OU", "Ouémé"),
    sub("BJ-PL", "Plateau"),
    sub("BJ-ZO", "Zou"),
    // Brunei Darussalam
    sub("BN-BE", "Belait"),
    sub("BN-BM", "Brunei-Muara"),
    sub("BN-TE", "Temburong"),
    sub("BN-TU", "Tutong"),
    // Bolivia, Plurinational State of
    sub("BO-B", "El Beni"),
    sub("BO-C", "Cochabamba"),
    sub("BO-H", "Chuquisaca"),
    sub("BO-L", "La Paz"),
    sub("BO-N", "Pando"),
    sub("BO-O", "Oruro"),
    sub("BO-P", "Potosí"),
    sub("BO-S", "Santa Cruz"),
    sub("BO-T", "Tarija"),
    // Bonaire, Sint Eustatius and Saba
    sub("BQ-BO", "Bonaire"),
    sub("BQ-SA", "Saba"),
    sub("BQ-SE", "Sint Eustatius"),
    // Brazil
    sub("BR-AC", "Acre"),
    sub("BR-AL", "Alagoas"),
    sub("BR-AM", "Amazonas"),
    sub("BR-AP", "Amapá"),
    sub("BR-BA", "Bahia"),
    sub("BR-CE", "Ceará"),
    sub("BR-DF", "Distrito Federal"),
    sub("BR-ES", "Espírito Santo"),
    sub("BR-GO", "Goiás"),
    sub("BR-MA", "Maranhão"),
    sub("BR-MG", "Minas Gerais"),
    sub("BR-MS", "Mato Grosso do Sul"),
    sub("BR-MT", "Mato Grosso"),
    sub("BR-PA", "Pará"),
    sub("BR-PB", "Paraíba"),
    sub("BR-PE", "Pernambuco"),
    sub("BR-PI", "Piauí"),
    sub("BR-PR", "Paraná"),
    sub("BR-RJ", "Rio de Janeiro"),
    sub("BR-RN", "Rio Grande do Norte"),
    sub("BR-RO", "Rondônia"),
    sub("BR-RR", "Roraima"),
    sub("BR-RS", "Rio Grande do Sul"),
    sub("BR-SC", "Santa Catarina"),
    sub("BR-SE", "Sergipe"),
    sub("BR-SP", "São Paulo"),
    sub("BR-TO", "Tocantins"),
    // Bahamas
    sub("BS-AK", "Acklins"),
    sub("BS-BI", "Bimini"),
    sub("BS-BP", "Black Point"),
    sub("BS-BY", "Berry Islands"),
    sub("BS-CE", "Central Eleuthera"),
    sub("BS-CI", "Cat Island"),
    sub("BS-CK", "Crooked Island and Long Cay"),
    sub("BS-CO", "Central Abaco"),
    sub("BS-CS", "Central Andros"),
    sub("BS-EG", "East Grand Bahama"),
    sub("BS-EX", "Exuma"),
    sub("BS-FP", "City of Freeport"),
    sub("BS-GC", "Grand Cay"),
    sub("BS-HI", "Harbour Island"),
    sub("BS-HT", "Hope Town"),
    sub("BS-IN", "Inagua"),
    sub("BS-LI", "Long Island"),
    sub("BS-MC", "Mangrove Cay"),
    sub("BS-MG", "Mayaguana"),
    sub("BS-MI", "Moore's Island"),
    sub("BS-NE", "North Eleuthera"),
    sub("BS-NO", "North Abaco"),
    sub("BS-NP", "New Providence"),
    sub("BS-NS", "North Andros"),
    sub("BS-RC", "Rum Cay"),
    sub("BS-RI", "Ragged Island"),
    sub("BS-SA", "South Andros"),
    sub("BS-SE", "South Eleuthera"),
    sub("BS-SO", "South Abaco"),
    sub("BS-SS", "San Salvador"),
    sub("BS-SW", "Spanish Wells"),
    sub("BS-WG", "West Grand Bahama"),
    // Bhutan
    sub("BT-11", "Paro"),
    sub("BT-12", "Chhukha"),
    sub("BT-13", "Haa"),
    sub("BT-14", "Samtse"),
    sub("BT-15", "Thimphu"),
    sub("BT-21", "Tsirang"),
    sub("BT-22", "Dagana"),
    sub("BT-23", "Punakha"),
    sub("BT-24", "Wangdue Phodrang"),
    sub("BT-31", "Sarpang"),
    sub("BT-32", "Trongsa"),
    sub("BT-33", "Bumthang"),
    sub("BT-34", "Zhemgang"),
    sub("BT-41", "Trashigang"),
    sub("BT-42", "Monggar"),
    sub("BT-43", "Pema Gatshel"),
    sub("BT-44", "Lhuentse"),
    sub("BT-45", "Samdrup Jongkhar"),
    sub("BT-GA", "Gasa"),
    sub("BT-TY", "Trashi Yangtse"),
    // Botswana
    sub("BW-CE", "Central"),
    sub("BW-CH", "Chobe"),
    sub("BW-FR", "Francistown"),
    sub("BW-GA", "Gaborone"),
    sub("BW-GH", "Ghanzi"),
    sub("BW-JW", "Jwaneng"),
    sub("BW-KG", "Kgalagadi"),
    sub("BW-KL", "Kgatleng"),
    sub("BW-KW", "Kweneng"),
    sub("BW-LO", "Lobatse"),
    sub("BW-NE", "North East"),
    sub("BW-NW", "North West"),
    sub("BW-SE", "South East"),
    sub("BW-SO", "Southern"),
    sub("BW-SP", "Selibe Phikwe"),
    sub("BW-ST", "Sowa Town"),
    // Belarus
    sub("BY-BR", "Bresckaja voblasć"),
    sub("BY-HM", "Gorod Minsk"),
    sub("BY-HO", "Gomel'skaja oblast'"),
    sub("BY-HR", "Grodnenskaja oblast'"),
    sub("BY-MA", "Mahilioŭskaja voblasć"),
    sub("BY-MI", "Minskaja oblast'"),
    sub("BY-VI", "Viciebskaja voblasć"),
    // Belize
    sub("BZ-BZ", "Belize"),
    sub("BZ-CY", "Cayo"),
    sub("BZ-CZL", "Corozal"),
    sub("BZ-OW", "Orange Walk"),
    sub("BZ-SC", "Stann Creek"),
    sub("BZ-TOL", "Toledo"),
    // Canada
    sub("CA-AB", "Alberta"),
    sub("CA-BC", "British Columbia"),
    sub("CA-MB", "Manitoba"),
    sub("CA-NB", "New Brunswick"),
    sub("CA-NL", "Newfoundland and Labrador"),
    sub("CA-NS", "Nova Scotia"),
    sub("CA-NT", "Northwest Territories"),
    sub("CA-NU", "Nunavut"),
    sub("CA-ON", "Ontario"),
    sub("CA-PE", "Prince Edward Island"),
    sub("CA-QC", "Quebec"),
    sub("CA-SK", "Saskatchewan"),
    sub("CA-YT", "Yukon"),
    // Congo, The Democratic Republic of the
    sub("CD-BC", "Kongo Central"),
    sub("CD-BU", "Bas-Uélé"),
    sub("CD-EQ", "Équateur"),
    sub("CD-HK", "Haut-Katanga"),
    sub("CD-HL", "Haut-Lomami"),
    sub("CD-HU", "Haut-Uélé"),
    sub("CD-IT", "Ituri"),
    sub("CD-KC", "Kasaï Central"),
    sub("CD-KE", "Kasaï Oriental"),
    sub("CD-KG", "Kwango"),
    sub("CD-KL", "Kwilu"),
    sub("CD-KN", "Kinshasa"),
    sub("CD-KS", "Kasaï"),
    sub("CD-LO", "Lomami"),
    sub("CD-LU", "Lualaba"),
    sub("CD-MA", "Maniema"),
    sub("CD-MN", "Mai-Ndombe"),
    sub("CD-MO", "Mongala"),
    sub("CD-NK", "Nord-Kivu"),
    sub("CD-NU", "Nord-Ubangi"),
    sub("CD-SA", "Sankuru"),
    sub("CD-SK", "Sud-Kivu"),
    sub("CD-SU", "Sud-Ubangi"),
    sub("CD-TA", "Tanganyika"),
    sub("CD-TO", "Tshopo"),
    sub("CD-TU", "Tshuapa"),
    // Central African Republic
    sub("CF-AC", "Ouham"),
    sub("CF-BB", "Bamingui-Bangoran"),
    sub("CF-BGF", "Bangui"),
    sub("CF-BK", "Basse-Kotto"),
    sub("CF-HK", "Haute-Kotto"),
    sub("CF-HM", "Haut-Mbomou"),
    sub("CF-HS", "Haute-Sangha / Mambéré-Kadéï"),
    sub("CF-KB", "Gribingui"),
    sub("CF-KG", "Kemö-Gïrïbïngï"),
    sub("CF-LB", "Lobaye"),
    sub("CF-MB", "Mbomou"),
    sub("CF-MP", "Ombella-Mpoko"),
    sub("CF-NM", "Nana-Mambéré"),
    sub("CF-OP", "Ouham-Pendé"),
    sub("CF-SE", "Sangha"),
    sub("CF-UK", "Ouaka"),
    sub("CF-VK", "Vakaga"),
    // Congo
    sub("CG-11", "Bouenza"),
    sub("CG-12", "Pool"),
    sub("CG-13", "Sangha"),
    sub("CG-14", "Plateaux"),
    sub("CG-15", "Cuvette-Ouest"),
    sub("CG-16", "Pointe-Noire"),
    sub("CG-2", "Lékoumou"),
    sub("CG-5", "Kouilou"),
    sub("CG-7", "Likouala"),
    sub("CG-8", "Cuvette"),
    sub("CG-9", "Niari"),
    sub("CG-BZV", "Brazzaville"),
    // Switzerland
    sub("CH-AG", "Aargau"),
    sub("CH-AI", "Appenzell Innerrhoden"),
    sub("CH-AR", "Appenzell Ausserrhoden"),
    sub("CH-BE", "Bern"),
    sub("CH-BL", "Basel-Landschaft"),
    sub("CH-BS", "Basel-Stadt"),
    sub("CH-FR", "Freiburg"),
    sub("CH-GE", "Genève"),
    sub("CH-GL", "Glarus"),
    sub("CH-GR", "Graubünden"),
    sub("CH-JU", "Jura"),
    sub("CH-LU", "Luzern"),
    sub("CH-NE", "Neuchâtel"),
    sub("CH-NW", "Nidwalden"),
    sub("CH-OW", "Obwalden"),
    sub("CH-SG", "Sankt Gallen"),
    sub("CH-SH", "Schaffhausen"),
    sub("CH-SO", "Solothurn"),
    sub("CH-SZ", "Schwyz"),
    sub("CH-TG", "Thurgau"),
    sub("CH-TI", "Ticino"),
    sub("CH-UR", "Uri"),
    sub("CH-VD", "Vaud"),
    sub("CH-VS", "Valais"),
    sub("CH-ZG", "Zug"),
    sub("CH-ZH", "Zürich"),
    // Côte d'Ivoire
    sub("CI-AB", "Abidjan"),
    sub("CI-BS", "Bas-Sassandra"),
    sub("CI-CM", "Comoé"),
    sub("CI-DN", "Denguélé"),
    sub("CI-GD", "Gôh-Djiboua"),
    sub("CI-LC", "Lacs"),
    sub("CI-LG", "Lagunes"),
    sub("CI-MG", "Montagnes"),
    sub("CI-SM", "Sassandra-Marahoué"),
    sub("CI-SV", "Savanes"),
    sub("CI-VB", "Vallée du Bandama"),
    sub("CI-WR", "Woroba"),
    sub("CI-YM", "Yamoussoukro"),
    sub("CI-ZZ", "Zanzan"),
    // Chile
    sub("CL-AI", "Aisén del General Carlos Ibañez del Campo"),
    sub("CL-AN", "Antofagasta"),
    sub("CL-AP", "Arica y Parinacota"),
    sub("CL-AR", "La Araucanía"),
    sub("CL-AT", "Atacama"),
    sub("CL-BI", "Biobío"),
    sub("CL-CO", "Coquimbo"),
    sub("CL-LI", "Libertador General Bernardo O'Higgins"),
    sub("CL-LL", "Los Lagos"),
    sub("CL-LR", "Los Ríos"),
    sub("CL-MA", "Magallanes"),
    sub("CL-ML", "Maule"),
    sub("CL-NB", "Ñuble"),
    sub("CL-RM", "Región Metropolitana de Santiago"),
    sub("CL-TA", "Tarapacá"),
    sub("CL-VS", "Valparaíso"),
    // Cameroon
    sub("CM-AD", "Adamaoua"),
    sub("CM-CE", "Centre"),
    sub("CM-EN", "Far North"),
    sub("CM-ES", "East"),
    sub("CM-LT", "Littoral"),
    sub("CM-NO", "North"),
    sub("CM-NW", "North-West"),
    sub("CM-OU", "West"),
    sub("CM-SU", "South"),
    sub("CM-SW", "South-West"),
    // China
    sub("CN-AH", "Anhui Sheng"),
    sub("CN-BJ", "Beijing Shi"),
    sub("CN-CQ", "Chongqing Shi"),
    sub("CN-FJ", "Fujian Sheng"),
    sub("CN-GD", "Guangdong Sheng"),
    sub("CN-GS", "Gansu Sheng"),
    sub("CN-GX", "Guangxi Zhuangzu Zizhiqu"),
    sub("CN-GZ", "Guizhou Sheng"),
    sub("CN-HA", "Henan Sheng"),
    sub("CN-HB", "Hubei Sheng"),
    sub("CN-HE", "Hebei Sheng"),
    sub("CN-HI", "Hainan Sheng"),
    sub("CN-HK", "Hong Kong SAR"),
    sub("CN-HL", "Heilongjiang Sheng"),
    sub("CN-HN", "Hunan Sheng"),
    sub("CN-JL", "Jilin Sheng"),
    sub("CN-JS", "Jiangsu Sheng"),
    sub("CN-JX", "Jiangxi Sheng"),
    sub("CN-LN", "Liaoning Sheng"),
    sub("CN-MO", "Macao SAR"),
    sub("CN-NM", "Nei Mongol Zizhiqu"),
    sub("CN-NX", "Ningxia Huizi Zizhiqu"),
    sub("CN-QH", "Qinghai Sheng"),
    sub("CN-SC", "Sichuan Sheng"),
    sub("CN-SD", "Shandong Sheng"),
    sub("CN-SH", "Shanghai Shi"),
    sub("CN-SN", "Shaanxi Sheng"),
    sub("CN-SX", "Shanxi Sheng"),
    sub("CN-TJ", "Tianjin Shi"),
    sub("CN-TW", "Taiwan Sheng"),
    sub("CN-XJ", "Xinjiang Uygur Zizhiqu"),
    sub("CN-XZ", "Xizang Zizhiqu"),
    sub("CN-YN", "Yunnan Sheng"),
    sub("CN-ZJ", "Zhejiang Sheng"),
    // Colombia
    sub("CO-AMA", "Amazonas"),
    sub("CO-ANT", "Antioquia"),
    sub("CO-ARA", "Arauca"),
    sub("CO-ATL", "Atlántico"),
    sub("CO-BOL", "Bolívar"),
    sub("CO-BOY", "Boyacá"),
    sub("CO-CAL", "Caldas"),
    sub("CO-CAQ", "Caquetá"),
    sub("CO-CAS", "Casanare"),
    sub("CO-CAU", "Cauca"),
    sub("CO-CES", "Cesar"),
    sub("CO-CHO", "Chocó"),
    sub("CO-COR", "Córdoba"),
    sub("CO-CUN", "Cundinamarca"),
    sub("CO-DC", "Distrito Capital de Bogotá"),
    sub("CO-GUA", "Guainía"),
    sub("CO-GUV", "Guaviare"),
    sub("CO-HUI", "Huila"),
    sub("CO-LAG", "La Guajira"),
    sub("CO-MAG", "Magdalena"),
    sub("CO-MET", "Meta"),
    sub("CO-NAR", "Nariño"),
    sub("CO-NSA", "Norte de Santander"),
    sub("CO-PUT", "Putumayo"),
    sub("CO-QUI", "Quindío"),
    sub("CO-RIS", "Risaralda"),
    sub("CO-SAN", "Santander"),
    sub("CO-SAP", "San Andrés, Providencia y Santa Catalina"),
    sub("CO-SUC", "Sucre"),
    sub("CO-TOL", "Tolima"),
    sub("CO-VAC", "Valle del Cauca"),
    sub("CO-VAU", "Vaupés"),
    sub("CO-VID", "Vichada"),
    // Costa Rica
    sub("CR-A", "Alajuela"),
    sub("CR-C", "Cartago"),
    sub("CR-G", "Guanacaste"),
    sub("CR-H", "Heredia"),
    sub("CR-L", "Limón"),
    sub("CR-P", "Puntarenas"),
    sub("CR-SJ", "San José"),
    // Cuba
    sub("CU-01", "Pinar del Río"),
    sub("CU-03", "La Habana"),
    sub("CU-04", "Matanzas"),
    sub("CU-05", "Villa Clara"),
    sub("CU-06", "Cienfuegos"),
    sub("CU-07", "Sancti Spíritus"),
    sub("CU-08", "Ciego de Ávila"),
    sub("CU-09", "Camagüey"),
    sub("CU-10", "Las Tunas"),
    sub("CU-11", "Holguín"),
    sub("CU-12", "Granma"),
    sub("CU-13", "Santiago de Cuba"),
    sub("CU-14", "Guantánamo"),
    sub("CU-15", "Artemisa"),
    sub("CU-16", "Mayabeque"),
    sub("CU-99", "Isla de la Juventud"),
    // Cabo Verde
    sub("CV-B", "Ilhas de Barlavento"),
    sub("CV-BR", "Brava"),
    sub("CV-BV", "Boa Vista"),
    sub("CV-CA", "Santa Catarina"),
    sub("CV-CF", "Santa Catarina do Fogo"),
    sub("CV-CR", "Santa Cruz"),
    sub("CV-MA", "Maio"),
    sub("CV-MO", "Mosteiros"),
    sub("CV-PA", "Paul"),
    sub("CV-PN", "Porto Novo"),
    sub("CV-PR", "Praia"),
    sub("CV-RB", "Ribeira Brava"),
    sub("CV-RG", "Ribeira Grande"),
    sub("CV-RS", "Ribeira Grande de Santiago"),
    sub("CV-S", "Ilhas de Sotavento"),
    sub("CV-SD", "São Domingos"),
    sub("CV-SF", "São Filipe"),
    sub("CV-SL", "Sal"),
    sub("CV-SM", "São Miguel"),
    sub("CV-SO", "São Lourenço dos Órgãos"),
    sub("CV-SS", "São Salvador do Mundo"),
    sub("CV-SV", "São Vicente"),
    sub("CV-TA", "Tarrafal"),
    sub("CV-TS", "Tarrafal de São Nicolau"),
    // Cyprus
    sub("CY-01", "Lefkosia"),
    sub("CY-02", "Lemesos"),
    sub("CY-03", "Larnaka"),
    sub("CY-04", "Ammochostos"),
    sub("CY-05", "Baf"),
    sub("CY-06", "Girne"),
    // Czechia
    sub("CZ-10", "Praha, Hlavní město"),
    sub("CZ-20", "Středočeský kraj"),
    sub("CZ-201", "Benešov"),
    sub("CZ-202", "Beroun"),
    sub("CZ-203", "Kladno"),
    sub("CZ-204", "Kolín"),
    sub("CZ-205", "Kutná Hora"),
    sub("CZ-206", "Mělník"),
    sub("CZ-207", "Mladá Boleslav"),
    sub("CZ-208", "Nymburk"),
    sub("CZ-209", "Praha-východ"),
    sub("CZ-20A", "Praha-západ"),
    sub("CZ-20B", "Příbram"),
    sub("CZ-20C", "Rakovník"),
    sub("CZ-31", "Jihočeský kraj"),
    sub("CZ-311", "České Budějovice"),
    sub("CZ-312", "Český Krumlov"),
    sub("CZ-313", "Jindřichův Hradec"),
    sub("CZ-314", "Písek"),
    sub("CZ-315", "Prachatice"),
    sub("CZ-316", "Strakonice"),
    sub("CZ-317", "Tábor"),
    sub("CZ-32", "Plzeňský kraj"),
    sub("CZ-321", "Domažlice"),
    sub("CZ-322", "Klatovy"),
    sub("CZ-323", "Plzeň-město"),
    sub("CZ-324", "Plzeň-jih"),
    sub("CZ-325", "Plzeň-sever"),
    sub("CZ-326", "Rokycany"),
    sub("CZ-327", "Tachov"),
    sub("CZ-41", "Karlovarský kraj"),
    sub("CZ-411", "Cheb"),
    sub("CZ-412", "Karlovy Vary"),
    sub("CZ-413", "Sokolov"),
    sub("CZ-42", "Ústecký kraj"),
    sub("CZ-421", "Děčín"),
    sub("CZ-422", "Chomutov"),
    sub("CZ-423", "Litoměřice"),
    sub("CZ-424", "Louny"),
    sub("CZ-425", "Most"),
    sub("CZ-426", "Teplice"),
    sub("CZ-427", "Ústí nad Labem"),
    sub("CZ-51", "Liberecký kraj"),
    sub("CZ-511", "Česká Lípa"),
    sub("CZ-512", "Jablonec nad Nisou"),
    sub("CZ-513", "Liberec"),
    sub("CZ-514", "Semily"),
    sub("CZ-52", "Královéhradecký kraj"),
    sub("CZ-521", "Hradec Králové"),
    sub("CZ-522", "Jičín"),
    sub("CZ-523", "Náchod"),
    sub("CZ-524", "Rychnov nad Kněžnou"),
    sub("CZ-525", "Trutnov"),
    sub("CZ-53", "Pardubický kraj"),
    sub("CZ-531", "Chrudim"),
    sub("CZ-532", "Pardubice"),
    sub("CZ-533", "Svitavy"),
    sub("CZ-534", "Ústí nad Orlicí"),
    sub("CZ-63", "Kraj Vysočina"),
    sub("CZ-631", "Havlíčkův Brod"),
    sub("CZ-632", "Jihlava"),
    sub("CZ-633", "Pelhřimov"),
    sub("CZ-634", "Třebíč"),
    sub("CZ-635", "Žďár nad Sázavou"),
    sub("CZ-64", "Jihomoravský kraj"),
    sub("CZ-641", "Blansko"),
    sub("CZ-642", "Brno-město"),
    sub("CZ-643", "Brno-venkov"),
    sub("CZ-644", "Břeclav"),
    sub("CZ-645", "Hodonín"),
    sub("CZ-646", "Vyškov"),
    sub("CZ-647", "Znojmo"),
    sub("CZ-71", "Olomoucký kraj"),
    sub("CZ-711", "Jeseník"),
    sub("CZ-712", "Olomouc"),
    sub("CZ-713", "Prostějov"),
    sub("CZ-714", "Přerov"),
    sub("CZ-715", "Šumperk"),
    sub("CZ-72", "Zlínský kraj"),
    sub("CZ-721", "Kroměříž"),
    sub("CZ-722", "Uherské Hradiště"),
    sub("CZ-723", "Vsetín"),
    sub("CZ-724", "Zlín"),
    sub("CZ-80", "Moravskoslezský kraj"),
    sub("CZ-801", "Bruntál"),
    sub("CZ-802", "Frýdek-Místek"),
    sub("CZ-803", "Karviná"),
    sub("CZ-804", "Nový Jičín"),
    sub("CZ-805", "Opava"),
    sub("CZ-806", "Ostrava-město"),
    // Germany
    sub("DE-BB", "Brandenburg"),
    sub("DE-BE", "Berlin"),
    sub("DE-BW", "Baden-Württemberg"),
    sub("DE-BY", "Bayern"),
    sub("DE-HB", "Bremen"),
    sub("DE-HE", "Hessen"),
    sub("DE-HH", "Hamburg"),
    sub("DE-MV", "Mecklenburg-Vorpommern"),
    sub("DE-NI", "Niedersachsen"),
    sub("DE-NW", "Nordrhein-Westfalen"),
    sub("DE-RP", "Rheinland-Pfalz"),
    sub("DE-SH", "Schleswig-Holstein"),
    sub("DE-SL", "Saarland"),
    sub("DE-SN", "Sachsen"),
    sub("DE-ST", "Sachsen-Anhalt"),
    sub("DE-TH", "Thüringen"),
    // Djibouti
    sub("DJ-AR", "Arta"),
    sub("DJ-AS", "Ali Sabieh"),
    sub("DJ-DI", "Dikhil"),
    sub("DJ-DJ", "Djibouti"),
    sub("DJ-OB", "Awbūk"),
    sub("DJ-TA", "Tadjourah"),
    // Denmark
    sub("DK-81", "Nordjylland"),
    sub("DK-82", "Midtjylland"),
    sub("DK-83", "Syddanmark"),
    sub("DK-84", "Hovedstaden"),
    sub("DK-85", "Sjælland"),
    // Dominica
    sub("DM-02", "Saint Andrew"),
    sub("DM-03", "Saint David"),
    sub("DM-04", "Saint George"),
    sub("DM-05", "Saint John"),
    sub("DM-06", "Saint Joseph"),
    sub("DM-07", "Saint Luke"),
    sub("DM-08", "Saint Mark"),
    sub("DM-09", "Saint Patrick"),
    sub("DM-10", "Saint Paul"),
    sub("DM-11", "Saint Peter"),
    // Dominican Republic
    sub("DO-01", "Distrito Nacional (Santo Domingo)"),
    sub("DO-02", "Azua"),
    sub("DO-03", "Baoruco"),
    sub("DO-04", "Barahona"),
    sub("DO-05", "Dajabón"),
    sub("DO-06", "Duarte"),
    sub("DO-07", "Elías Piña"),
    sub("DO-08", "El Seibo"),
    sub("DO-09", "Espaillat"),
    sub("DO-10", "Independencia"),
    sub("DO-11", "La Altagracia"),
    sub("DO-12", "La Romana"),
    sub("DO-13", "La Vega"),
    sub("DO-14", "María Trinidad Sánchez"),
    sub("DO-15", "Monte Cristi"),
    sub("DO-16", "Pedernales"),
    sub("DO-17", "Peravia"),
    sub("DO-18", "Puerto Plata"),
    sub("DO-19", "Hermanas Mirabal"),
    sub("DO-20", "Samaná"),
    sub("DO-21", "San Cristóbal"),
    sub("DO-22", "San Juan"),
    sub("DO-23", "San Pedro de Macorís"),
    sub("DO-24", "Sánchez Ramírez"),
    sub("DO-25", "Santiago"),
    sub("DO-26", "Santiago Rodríguez"),
    sub("DO-27", "Valverde"),
    sub("DO-28", "Monseñor Nouel"),
    sub("DO-29", "Monte Plata"),
    sub("DO-30", "Hato Mayor"),
    sub("DO-31", "San José de Ocoa"),
    sub("DO-32", "Santo Domingo"),
    sub("DO-33", "Cibao Nordeste"),
    sub("DO-34", "Cibao Noroeste"),
    sub("DO-35", "Cibao Norte"),
    sub("DO-36", "Cibao Sur"),
    sub("DO-37", "El Valle"),
    sub("DO-38", "Enriquillo"),
    sub("DO-39", "Higuamo"),
    sub("DO-40", "Ozama"),
    sub("DO-41", "Valdesia"),
    sub("DO-42", "Yuma"),
    // Algeria
    sub("DZ-01", "Adrar"),
    sub("DZ-02", "Chlef"),
    sub("DZ-03", "Laghouat"),
    sub("DZ-04", "Oum el Bouaghi"),
    sub("DZ-05", "Batna"),
    sub("DZ-06", "Béjaïa"),
    sub("DZ-07", "Biskra"),
    sub("DZ-08", "Béchar"),
    sub("DZ-09", "Blida"),
    sub("DZ-10", "Bouira"),
    sub("DZ-11", "Tamanrasset"),
    sub("DZ-12", "Tébessa"),
    sub("DZ-13", "Tlemcen"),
    sub("DZ-14", "Tiaret"),
    sub("DZ-15", "Tizi Ouzou"),
    sub("DZ-16", "Alger"),
    sub("DZ-17", "Djelfa"),
    sub("DZ-18", "Jijel"),
    sub("DZ-19", "Sétif"),
    sub("DZ-20", "Saïda"),
    sub("DZ-21", "Skikda"),
    sub("DZ-22", "Sidi Bel Abbès"),
    sub("DZ-23", "Annaba"),
    sub("DZ-24", "Guelma"),
    sub("DZ-25", "Constantine"),
    sub("DZ-26", "Médéa"),
    sub("DZ-27", "Mostaganem"),
    sub("DZ-28", "M'sila"),
    sub("DZ-29", "Mascara"),
    sub("DZ-30", "Ouargla"),
    sub("DZ-31", "Oran"),
    sub("DZ-32", "El Bayadh"),
    sub("DZ-33", "Illizi"),
    sub("DZ-34", "Bordj Bou Arréridj"),
    sub("DZ-35", "Boumerdès"),
    sub("DZ-36", "El Tarf"),
    sub("DZ-37", "Tindouf"),
    sub("DZ-38", "Tissemsilt"),
    sub("DZ-39", "El Oued"),
    sub("DZ-40", "Khenchela"),
    sub("DZ-41", "Souk Ahras"),
    sub("DZ-42", "Tipaza"),
    sub("DZ-43", "Mila"),
    sub("DZ-44", "Aïn Defla"),
    sub("DZ-45", "Naama"),
    sub("DZ-46", "Aïn Témouchent"),
    sub("DZ-47", "Ghardaïa"),
    sub("DZ-48", "Relizane"),
    // Ecuador
    sub("EC-A", "Azuay"),
    sub("EC-B", "Bolívar"),
    sub("EC-C", "Carchi"),
    sub("EC-D", "Orellana"),
    sub("EC-E", "Esmeraldas"),
    sub("EC-F", "Cañar"),
    sub("EC-G", "Guayas"),
    sub("EC-H", "Chimborazo"),
    sub("EC-I", "Imbabura"),
    sub("EC-L", "Loja"),
    sub("EC-M", "Manabí"),
    sub("EC-N", "Napo"),
    sub("EC-O", "El Oro"),
    sub("EC-P", "Pichincha"),
    sub("EC-R", "Los Ríos"),
    sub("EC-S", "Morona Santiago"),
    sub("EC-SD", "Santo Domingo de los Tsáchilas"),
    sub("EC-SE", "Santa Elena"),
    sub("EC-T", "Tungurahua"),
    sub("EC-U", "Sucumbíos"),
    sub("EC-W", "Galápagos"),
    sub("EC-X", "Cotopaxi"),
    sub("EC-Y", "Pastaza"),
    sub("EC-Z", "Zamora Chinchipe"),
    // Estonia
    sub("EE-130", "Alutaguse"),
    sub("EE-141", "Anija"),
    sub("EE-142", "Antsla"),
    sub("EE-171", "Elva"),
    sub("EE-184", "Haapsalu"),
    sub("EE-191", "Haljala"),
    sub("EE-198", "Harku"),
    sub("EE-205", "Hiiumaa"),
    sub("EE-214", "Häädemeeste"),
    sub("EE-245", "Jõelähtme"),
    sub("EE-247", "Jõgeva"),
    sub("EE-251", "Jõhvi"),
    sub("EE-255", "Järva"),
    sub("EE-272", "Kadrina"),
    sub("EE-283", "Kambja"),
    sub("EE-284", "Kanepi"),
    sub("EE-291", "Kastre"),
    sub("EE-293", "Kehtna"),
    sub("EE-296", "Keila"),
    sub("EE-303", "Kihnu"),
    sub("EE-305", "Kiili"),
    sub("EE-317", "Kohila"),
    sub("EE-321", "Kohtla-Järve"),
    sub("EE-338", "Kose"),
    sub("EE-353", "Kuusalu"),
    sub("EE-37", "Harjumaa"),
    sub("EE-39", "Hiiumaa"),
    sub("EE-424", "Loksa"),
    sub("EE-430", "Lääneranna"),
    sub("EE-431", "Lääne-Harju"),
    sub("EE-432", "Luunja"),
    sub("EE-441", "Lääne-Nigula"),
    sub("EE-442", "Lüganuse"),
    sub("EE-446", "Maardu"),
    sub("EE-45", "Ida-Virumaa"),
    sub("EE-478", "Muhu"),
    sub("EE-480", "Mulgi"),
    sub("EE-486", "Mustvee"),
    sub("EE-50", "Jõgevamaa"),
    sub("EE-503", "Märjamaa"),
    sub("EE-511", "Narva"),
    sub("EE-514", "Narva-Jõesuu"),
    sub("EE-52", "Järvamaa"),
    sub("EE-528", "Nõo"),
    sub("EE-557", "Otepää"),
    sub("EE-56", "Läänemaa"),
    sub("EE-567", "Paide"),
    sub("EE-586", "Peipsiääre"),
    sub("EE-60", "Lääne-Virumaa"),
    sub("EE-615", "Põhja-Sakala"),
    sub("EE-618", "Põltsamaa"),
    sub("EE-622", "Põlva"),
    sub("EE-624", "Pärnu"),
    sub("EE-638", "Põhja-Pärnumaa"),
    sub("EE-64", "Põlvamaa"),
    sub("EE-651", "Raasiku"),
    sub("EE-653", "Rae"),
    sub("EE-661", "Rakvere"),
    sub("EE-663", "Rakvere"),
    sub("EE-668", "Rapla"),
    sub("EE-68", "Pärnumaa"),
    sub("EE-689", "Ruhnu"),
    sub("EE-698", "Rõuge"),
    sub("EE-708", "Räpina"),
    sub("EE-71", "Raplamaa"),
    sub("EE-712", "Saarde"),
    sub("EE-714", "Saaremaa"),
    sub("EE-719", "Saku"),
    sub("EE-726", "Saue"),
    sub("EE-732", "Setomaa"),
    sub("EE-735", "Sillamäe"),
    sub("EE-74", "Saaremaa"),
    sub("EE-784", "Tallinn"),
    sub("EE-79", "Tartumaa"),
    sub("EE-792", "Tapa"),
    sub("EE-793", "Tartu"),
    sub("EE-796", "Tartu"),
    sub("EE-803", "Toila"),
    sub("EE-809", "Tori"),
    sub("EE-81", "Valgamaa"),
    sub("EE-824", "Tõrva"),
    sub("EE-834", "Türi"),
    sub("EE-84", "Viljandimaa"),
    sub("EE-855", "Valga"),
    sub("EE-87", "Võrumaa"),
    sub("EE-890", "Viimsi"),
    sub("EE-897", "Viljandi"),
    sub("EE-899", "Viljandi"),
    sub("EE-901", "Vinni"),
    sub("EE-903", "Viru-Nigula"),
    sub("EE-907", "Vormsi"),
    sub("EE-917", "Võru"),
    sub("EE-919", "Võru"),
    sub("EE-928", "Väike-Maarja"),
    // Egypt
    sub("EG-ALX", "Al Iskandarīyah"),
    sub("EG-ASN", "Aswān"),
    sub("EG-AST", "Asyūţ"),
    sub("EG-BA", "Al Baḩr al Aḩmar"),
    sub("EG-BH", "Al Buḩayrah"),
    sub("EG-BNS", "Banī Suwayf"),
    sub("EG-C", "Al Qāhirah"),
    sub("EG-DK", "Ad Daqahlīyah"),
    sub("EG-DT", "Dumyāţ"),
    sub("EG-FYM", "Al Fayyūm"),
    sub("EG-GH", "Al Gharbīyah"),
    sub("EG-GZ", "Al Jīzah"),
    sub("EG-IS", "Al Ismā'īlīyah"),
    sub("EG-JS", "Janūb Sīnā'"),
    sub("EG-KB", "Al Qalyūbīyah"),
    sub("EG-KFS", "Kafr ash Shaykh"),
    sub("EG-KN", "Qinā"),
    sub("EG-LX", "Al Uqşur"),
    sub("EG-MN", "Al Minyā"),
    sub("EG-MNF", "Al Minūfīyah"),
    sub("EG-MT", "Maţrūḩ"),
    sub("EG-PTS", "Būr Sa‘īd"),
    sub("EG-SHG", "Sūhāj"),
    sub("EG-SHR", "Ash Sharqīyah"),
    sub("EG-SIN", "Shamāl Sīnā'"),
    sub("EG-SUZ", "As Suways"),
    sub("EG-WAD", "Al Wādī al Jadīd"),
    // Eritrea
    sub("ER-AN", "Ansabā"),
    sub("ER-DK", "Debubawi K’eyyĭḥ Baḥri"),
    sub("ER-DU", "Al Janūbī"),
    sub("ER-GB", "Gash-Barka"),
    sub("ER-MA", "Al Awsaţ"),
    sub("ER-SK", "Semienawi K’eyyĭḥ Baḥri"),
    // Spain
    sub("ES-A", "Alacant*"),
    sub("ES-AB", "Albacete"),
    sub("ES-AL", "Almería"),
    sub("ES-AN", "Andalucía"),
    sub("ES-AR", "Aragón"),
    sub("ES-AS", "Asturias, Principado de"),
    sub("ES-AV", "Ávila"),
    sub("ES-B", "Barcelona [Barcelona]"),
    sub("ES-BA", "Badajoz"),
    sub("ES-BI", "Bizkaia"),
    sub("ES-BU", "Burgos"),
    sub("ES-C", "A Coruña [La Coruña]"),
    sub("ES-CA", "Cádiz"),
    sub("ES-CB", "Cantabria"),
    sub("ES-CC", "Cáceres"),
    sub("ES-CE", "Ceuta"),
    sub("ES-CL", "Castilla y León"),
    sub("ES-CM", "Castilla-La Mancha"),
    sub("ES-CN", "Canarias"),
    sub("ES-CO", "Córdoba"),
    sub("ES-CR", "Ciudad Real"),
    sub("ES-CS", "Castelló*"),
    sub("ES-CT", "Catalunya [Cataluña]"),
    sub("ES-CU", "Cuenca"),
    sub("ES-EX", "Extremadura"),
    sub("ES-GA", "Galicia [Galicia]"),
    sub("ES-GC", "Las Palmas"),
    sub("ES-GI", "Girona [Gerona]"),
    sub("ES-GR", "Granada"),
    sub("ES-GU", "Guadalajara"),
    sub("ES-H", "Huelva"),
    sub("ES-HU", "Huesca"),
    sub("ES-IB", "Illes Balears [Islas Baleares]"),
    sub("ES-J", "Jaén"),
    sub("ES-L", "Lleida [Lérida]"),
    sub("ES-LE", "León"),
    sub("ES-LO", "La Rioja"),
    sub("ES-LU", "Lugo [Lugo]"),
    sub("ES-M", "Madrid"),
    sub("ES-MA", "Málaga"),
    sub("ES-MC", "Murcia, Región de"),
    sub("ES-MD", "Madrid, Comunidad de"),
    sub("ES-ML", "Melilla"),
    sub("ES-MU", "Murcia"),
    sub("ES-NA", "Nafarroa*"),
    sub("ES-NC", "Nafarroako Foru Komunitatea*"),
    sub("ES-O", "Asturias"),
    sub("ES-OR", "Ourense [Orense]"),
    sub("ES-P", "Palencia"),
    sub("ES-PM", "Illes Balears [Islas Baleares]"),
    sub("ES-PO", "Pontevedra [Pontevedra]"),
    sub("ES-PV", "Euskal Herria"),
    sub("ES-RI", "La Rioja"),
    sub("ES-S", "Cantabria"),
    sub("ES-SA", "Salamanca"),
    sub("ES-SE", "Sevilla"),
    sub("ES-SG", "Segovia"),
    sub("ES-SO", "Soria"),
    sub("ES-SS", "Gipuzkoa"),
    sub("ES-T", "Tarragona [Tarragona]"),
    sub("ES-TE", "Teruel"),
    sub("ES-TF", "Santa Cruz de Tenerife"),
    sub("ES-TO", "Toledo"),
    sub("ES-V", "Valencia"),
    sub("ES-VA", "Valladolid"),
    sub("ES-VC", "Valenciana, Comunidad"),
    sub("ES-VI", "Araba*"),
    sub("ES-Z", "Zaragoza"),
    sub("ES-ZA", "Zamora"),
    // Ethiopia
    sub("ET-AA", "Addis Ababa"),
    sub("ET-AF", "Afar"),
    sub("ET-AM", "Amara"),
    sub("ET-BE", "Benshangul-Gumaz"),
    sub("ET-DD", "Dire Dawa"),
    sub("ET-GA", "Gambela Peoples"),
    sub("ET-HA", "Harari People"),
    sub("ET-OR", "Oromia"),
    sub("ET-SN", "Southern Nations, Nationalities and Peoples"),
    sub("ET-SO", "Somali"),
    sub("ET-TI", "Tigrai"),
    // Finland
    sub("FI-01", "Åland"),
    sub("FI-02", "Etelä-Karjala"),
    sub("FI-03", "Etelä-Pohjanmaa"),
    sub("FI-04", "Etelä-Savo"),
    sub("FI-05", "Kainuu"),
    sub("FI-06", "Kanta-Häme"),
    sub("FI-07", "Keski-Pohjanmaa"),
    sub("FI-08", "Keski-Suomi"),
    sub("FI-09", "Kymenlaakso"),
    sub("FI-10", "Lappi"),
    sub("FI-11", "Pirkanmaa"),
    sub("FI-12", "Pohjanmaa"),
    sub("FI-13", "Pohjois-Karjala"),
    sub("FI-14", "Pohjois-Pohjanmaa"),
    sub("FI-15", "Pohjois-Savo"),
    sub("FI-16", "Päijät-Häme"),
    sub("FI-17", "Satakunta"),
    sub("FI-18", "Uusimaa"),
    sub("FI-19", "Varsinais-Suomi"),
    // Fiji
    sub("FJ-01", "Ba"),
    sub("FJ-02", "Bua"),
    sub("FJ-03", "Cakaudrove"),
    sub("FJ-04", "Kadavu"),
    sub("FJ-05", "Lau"),
    sub("FJ-06", "Lomaiviti"),
    sub("FJ-07", "Macuata"),
    sub("FJ-08", "Nadroga and Navosa"),
    sub("FJ-09", "Naitasiri"),
    sub("FJ-10", "Namosi"),
    sub("FJ-11", "Ra"),
    sub("FJ-12", "Rewa"),
    sub("FJ-13", "Serua"),
    sub("FJ-14", "Tailevu"),
    sub("FJ-C", "Central"),
    sub("FJ-E", "Eastern"),
    sub("FJ-N", "Northern"),
    sub("FJ-R", "Rotuma"),
    sub("FJ-W", "Western"),
    // Micronesia, Federated States of
    sub("FM-KSA", "Kosrae"),
    sub("FM-PNI", "Pohnpei"),
    sub("FM-TRK", "Chuuk"),
    sub("FM-YAP", "Yap"),
    // France
    sub("FR-01", "Ain"),
    sub("FR-02", "Aisne"),
    sub("FR-03", "Allier"),
    sub("FR-04", "Alpes-de-Haute-Provence"),
    sub("FR-05", "Hautes-Alpes"),
    sub("FR-06", "Alpes-Maritimes"),
    sub("FR-07", "Ardèche"),
    sub("FR-08", "Ardennes"),
    sub("FR-09", "Ariège"),
    sub("FR-10", "Aube"),
    sub("FR-11", "Aude"),
    sub("FR-12", "Aveyron"),
    sub("FR-13", "Bouches-du-Rhône"),
    sub("FR-14", "Calvados"),
    sub("FR-15", "Cantal"),
    sub("FR-16", "Charente"),
    sub("FR-17", "Charente-Maritime"),
    sub("FR-18", "Cher"),
    sub("FR-19", "Corrèze"),
    sub("FR-20R", "Corse"),
    sub("FR-21", "Côte-d'Or"),
    sub("FR-22", "Côtes-d'Armor"),
    sub("FR-23", "Creuse"),
    sub("FR-24", "Dordogne"),
    sub("FR-25", "Doubs"),
    sub("FR-26", "Drôme"),
    sub("FR-27", "Eure"),
    sub("FR-28", "Eure-et-Loir"),
    sub("FR-29", "Finistère"),
    sub("FR-2A", "Corse-du-Sud"),
    sub("FR-2B", "Haute-Corse"),
    sub("FR-30", "Gard"),
    sub("FR-31", "Haute-Garonne"),
    sub("FR-32", "Gers"),
    sub("FR-33", "Gironde"),
    sub("FR-34", "Hérault"),
    sub("FR-35", "Ille-et-Vilaine"),
    sub("FR-36", "Indre"),
    sub("FR-37", "Indre-et-Loire"),
    sub("FR-38", "Isère"),
    sub("FR-39", "Jura"),
    sub("FR-40", "Landes"),
    sub("FR-41", "Loir-et-Cher"),
    sub("FR-42", "Loire"),
    sub("FR-43", "Haute-Loire"),
    sub("FR-44", "Loire-Atlantique"),
    sub("FR-45", "Loiret"),
    sub("FR-46", "Lot"),
    sub("FR-47", "Lot-et-Garonne"),
    sub("FR-48", "Lozère"),
    sub("FR-49", "Maine-et-Loire"),
    sub("FR-50", "Manche"),
    sub("FR-51", "Marne"),
    sub("FR-52", "Haute-Marne"),
    sub("FR-53", "Mayenne"),
    sub("FR-54", "Meurthe-et-Moselle"),
    sub("FR-55", "Meuse"),
    sub("FR-56", "Morbihan"),
    sub("FR-57", "Moselle"),
    sub("FR-58", "Nièvre"),
    sub("FR-59", "Nord"),
    sub("FR-60", "Oise"),
    sub("FR-61", "Orne"),
    sub("FR-62", "Pas-de-Calais"),
    sub("FR-63", "Puy-de-Dôme"),
    sub("FR-64", "Pyrénées-Atlantiques"),
    sub("FR-65", "Hautes-Pyrénées"),
    sub("FR-66", "Pyrénées-Orientales"),
    sub("FR-67", "Bas-Rhin"),
    sub("FR-68", "Haut-Rhin"),
    sub("FR-69", "Rhône"),
    sub("FR-70", "Haute-Saône"),
    sub("FR-71", "Saône-et-Loire"),
    sub("FR-72", "Sarthe"),
    sub("FR-73", "Savoie"),
    sub("FR-74", "Haute-Savoie"),
    sub("FR-75", "Paris"),
    sub("FR-76", "Seine-Maritime"),
    sub("FR-77", "Seine-et-Marne"),
    sub("FR-78", "Yvelines"),
    sub("FR-79", "Deux-Sèvres"),
    sub("FR-80", "Somme"),
    sub("FR-81", "Tarn"),
    sub("FR-82", "Tarn-et-Garonne"),
    sub("FR-83", "Var"),
    sub("FR-84", "Vaucluse"),
    sub("FR-85", "Vendée"),
    sub("FR-86", "Vienne"),
    sub("FR-87", "Haute-Vienne"),
    sub("FR-88", "Vosges"),
    sub("FR-89", "Yonne"),
    sub("FR-90", "Territoire de Belfort"),
    sub("FR-91", "Essonne"),
    sub("FR-92", "Hauts-de-Seine"),
    sub("FR-93", "Seine-Saint-Denis"),
    sub("FR-94", "Val-de-Marne"),
    sub("FR-95", "Val-d'Oise"),
    sub("FR-971", "Guadeloupe"),
    sub("FR-972", "Martinique"),
    sub("FR-973", "Guyane (française)"),
    sub("FR-974", "La Réunion"),
    sub("FR-976", "Mayotte"),
    sub("FR-ARA", "Auvergne-Rhône-Alpes"),
    sub("FR-BFC", "Bourgogne-Franche-Comté"),
    sub("FR-BL", "Saint-Barthélemy"),
    sub("FR-BRE", "Bretagne"),
    sub("FR-CP", "Clipperton"),
    sub("FR-CVL", "Centre-Val de Loire"),
    sub("FR-GES", "Grand-Est"),
    sub("FR-GF", "Guyane (française)"),
    sub("FR-GP", "Guadeloupe"),
    sub("FR-HDF", "Hauts-de-France"),
    sub("FR-IDF", "Île-de-France"),
    sub("FR-MF", "Saint-Martin"),
    sub("FR-MQ", "Martinique"),
    sub("FR-NAQ", "Nouvelle-Aquitaine"),
    sub("FR-NC", "Nouvelle-Calédonie"),
    sub("FR-NOR", "Normandie"),
    sub("FR-OCC", "Occitanie"),
    sub("FR-PAC", "Provence-Alpes-Côte-d’Azur"),
    sub("FR-PDL", "Pays-de-la-Loire"),
    sub("FR-PF", "Polynésie française"),
    sub("FR-PM", "Saint-Pierre-et-Miquelon"),
    sub("FR-RE", "La Réunion"),
    sub("FR-TF", "Terres australes françaises"),
    sub("FR-WF", "Wallis-et-Futuna"),
    sub("FR-YT", "Mayotte"),
    // Gabon
    sub("GA-1", "Estuaire"),
    sub("GA-2", "Haut-Ogooué"),
    sub("GA-3", "Moyen-Ogooué"),
    sub("GA-4", "Ngounié"),
    sub("GA-5", "Nyanga"),
    sub("GA-6", "Ogooué-Ivindo"),
    sub("GA-7", "Ogooué-Lolo"),
    sub("GA-8", "Ogooué-Maritime"),
    sub("GA-9", "Woleu-Ntem"),
    // United Kingdom
    sub("GB-ABC", "Armagh City, Banbridge and Craigavon"),
    sub("GB-ABD", "Aberdeenshire"),
    sub("GB-ABE", "Aberdeen City"),
    sub("GB-AGB", "Argyll and Bute"),
    sub("GB-AGY", "Isle of Anglesey [Sir Ynys Môn GB-YNM]"),
    sub("GB-AND", "Ards and North Down"),
    sub("GB-ANN", "Antrim and Newtownabbey"),
    sub("GB-ANS", "Angus"),
    sub("GB-BAS", "Bath and North East Somerset"),
    sub("GB-BBD", "Blackburn with Darwen"),
    sub("GB-BCP", "Bournemouth, Christchurch and Poole"),
    sub("GB-BDF", "Bedford"),
    sub("GB-BDG", "Barking and Dagenham"),
    sub("GB-BEN", "Brent"),
    sub("GB-BEX", "Bexley"),
    sub("GB-BFS", "Belfast City"),
    sub("GB-BGE", "Bridgend [Pen-y-bont ar Ogwr GB-POG]"),
    sub("GB-BGW", "Blaenau Gwent"),
    sub("GB-BIR", "Birmingham"),
    sub("GB-BKM", "Buckinghamshire"),
    sub("GB-BNE", "Barnet"),
    sub("GB-BNH", "Brighton and Hove"),
    sub("GB-BNS", "Barnsley"),
    sub("GB-BOL", "Bolton"),
    sub("GB-BPL", "Blackpool"),
    sub("GB-BRC", "Bracknell Forest"),
    sub("GB-BRD", "Bradford"),
    sub("GB-BRY", "Bromley"),
    sub("GB-BST", "Bristol, City of"),
    sub("GB-BUR", "Bury"),
    sub("GB-CAM", "Cambridgeshire"),
    sub("GB-CAY", "Caerphilly [Caerffili GB-CAF]"),
    sub("GB-CBF", "Central Bedfordshire"),
    sub("GB-CCG", "Causeway Coast and Glens"),
    sub("GB-CGN", "Ceredigion [Sir Ceredigion]"),
    sub("GB-CHE", "Cheshire East"),
    sub("GB-CHW", "Cheshire West and Chester"),
    sub("GB-CLD", "Calderdale"),
    sub("GB-CLK", "Clackmannanshire"),
    sub("GB-CMA", "Cumbria"),
    sub("GB-CMD", "Camden"),
    sub("GB-CMN", "Carmarthenshire [Sir Gaerfyrddin GB-GFY]"),
    sub("GB-CON", "Cornwall"),
    sub("GB-COV", "Coventry"),
    sub("GB-CRF", "Cardiff [Caerdydd GB-CRD]"),
    sub("GB-CRY", "Croydon"),
    sub("GB-CWY", "Conwy"),
    sub("GB-DAL", "Darlington"),
    sub("GB-DBY", "Derbyshire"),
    sub("GB-DEN", "Denbighshire [Sir Ddinbych GB-DDB]"),
    sub("GB-DER", "Derby"),
    sub("GB-DEV", "Devon"),
    sub("GB-DGY", "Dumfries and Galloway"),
    sub("GB-DNC", "Doncaster"),
    sub("GB-DND", "Dundee City"),
    sub("GB-DOR", "Dorset"),
    sub("GB-DRS", "Derry and Strabane"),
    sub("GB-DUD", "Dudley"),
    sub("GB-DUR", "Durham, County"),
    sub("GB-EAL", "Ealing"),
    sub("GB-EAY", "East Ayrshire"),
    sub("GB-EDH", "Edinburgh, City of"),
    sub("GB-EDU", "East Dunbartonshire"),
    sub("GB-ELN", "East Lothian"),
    sub("GB-ELS", "Eilean Siar"),
    sub("GB-ENF", "Enfield"),
    sub("GB-ENG", "England"),
    sub("GB-ERW", "East Renfrewshire"),
    sub("GB-ERY", "East Riding of Yorkshire"),
    sub("GB-ESS", "Essex"),
    sub("GB-ESX", "East Sussex"),
    sub("GB-FAL", "Falkirk"),
    sub("GB-FIF", "Fife"),
    sub("GB-FLN", "Flintshire [Sir y Fflint GB-FFL]"),
    sub("GB-FMO", "Fermanagh and Omagh"),
    sub("GB-GAT", "Gateshead"),
    sub("GB-GLG", "Glasgow City"),
    sub("GB-GLS", "Gloucestershire"),
    sub("GB-GRE", "Greenwich"),
    sub("GB-GWN", "Gwynedd"),
    sub("GB-HAL", "Halton"),
    sub("GB-HAM", "Hampshire"),
    sub("GB-HAV", "Havering"),
    sub("GB-HCK", "Hackney"),
    sub("GB-HEF", "Herefordshire"),
    sub("GB-HIL", "Hillingdon"),
    sub("GB-HLD", "Highland"),
    sub("GB-HMF", "Hammersmith and Fulham"),
    sub("GB-HNS", "Hounslow"),
    sub("GB-HPL", "Hartlepool"),
    sub("GB-HRT", "Hertfordshire"),
    sub("GB-HRW", "Harrow"),
    sub("GB-HRY", "Haringey"),
    sub("GB-IOS", "Isles of Scilly"),
    sub("GB-IOW", "Isle of Wight"),
    sub("GB-ISL", "Islington"),
    sub("GB-IVC", "Inverclyde"),
    sub("GB-KEC", "Kensington and Chelsea"),
    sub("GB-KEN", "Kent"),
    sub("GB-KHL", "Kingston upon Hull"),
    sub("GB-KIR", "Kirklees"),
    sub("GB-KTT", "Kingston upon Thames"),
    sub("GB-KWL", "Knowsley"),
    sub("GB-LAN", "Lancashire"),
    sub("GB-LBC", "Lisburn and Castlereagh"),
    sub("GB-LBH", "Lambeth"),
    sub("GB-LCE", "Leicester"),
    sub("GB-LDS", "Leeds"),
    sub("GB-LEC", "Leicestershire"),
    sub("GB-LEW", "Lewisham"),
    sub("GB-LIN", "Lincolnshire"),
    sub("GB-LIV", "Liverpool"),
    sub("GB-LND", "London, City of"),
    sub("GB-LUT", "Luton"),
    sub("GB-MAN", "Manchester"),
    sub("GB-MDB", "Middlesbrough"),
    sub("GB-MDW", "Medway"),
    sub("GB-MEA", "Mid and East Antrim"),
    sub("GB-MIK", "Milton Keynes"),
    sub("GB-MLN", "Midlothian"),
    sub("GB-MON", "Monmouthshire [Sir Fynwy GB-FYN]"),
    sub("GB-MRT", "Merton"),
    sub("GB-MRY", "Moray"),
    sub("GB-MTY", "Merthyr Tydfil [Merthyr Tudful GB-MTU]"),
    sub("GB-MUL", "Mid-Ulster"),
    sub("GB-NAY", "North Ayrshire"),
    sub("GB-NBL", "Northumberland"),
    sub("GB-NEL", "North East Lincolnshire"),
    sub("GB-NET", "Newcastle upon Tyne"),
    sub("GB-NFK", "Norfolk"),
    sub("GB-NGM", "Nottingham"),
    sub("GB-NIR", "Northern Ireland"),
    sub("GB-NLK", "North Lanarkshire"),
    sub("GB-NLN", "North Lincolnshire"),
    sub("GB-NMD", "Newry, Mourne and Down"),
    sub("GB-NSM", "North Somerset"),
    sub("GB-NTH", "Northamptonshire"),
    sub("GB-NTL", "Neath Port Talbot [Castell-nedd Port Talbot GB-CTL]"),
    sub("GB-NTT", "Nottinghamshire"),
    sub("GB-NTY", "North Tyneside"),
    sub("GB-NWM", "Newham"),
    sub("GB-NWP", "Newport [Casnewydd GB-CNW]"),
    sub("GB-NYK", "North Yorkshire"),
    sub("GB-OLD", "Oldham"),
    sub("GB-ORK", "Orkney Islands"),
    sub("GB-OXF", "Oxfordshire"),
    sub("GB-PEM", "Pembrokeshire [Sir Benfro GB-BNF]"),
    sub("GB-PKN", "Perth and Kinross"),
    sub("GB-PLY", "Plymouth"),
    sub("GB-POR", "Portsmouth"),
    sub("GB-POW", "Powys"),
    sub("GB-PTE", "Peterborough"),
    sub("GB-RCC", "Redcar and Cleveland"),
    sub("GB-RCH", "Rochdale"),
    sub("GB-RCT", "Rhondda Cynon Taff [Rhondda CynonTaf]"),
    sub("GB-RDB", "Redbridge"),
    sub("GB-RDG", "Reading"),
    sub("GB-RFW", "Renfrewshire"),
    sub("GB-RIC", "Richmond upon Thames"),
    sub("GB-ROT", "Rotherham"),
    sub("GB-RUT", "Rutland"),
    sub("GB-SAW", "Sandwell"),
    sub("GB-SAY", "South Ayrshire"),
    sub("GB-SCB", "Scottish Borders"),
    sub("GB-SCT", "Scotland"),
    sub("GB-SFK", "Suffolk"),
    sub("GB-SFT", "Sefton"),
    sub("GB-SGC", "South Gloucestershire"),
    sub("GB-SHF", "Sheffield"),
    sub("GB-SHN", "St. Helens"),
    sub("GB-SHR", "Shropshire"),
    sub("GB-SKP", "Stockport"),
    sub("GB-SLF", "Salford"),
    sub("GB-SLG", "Slough"),
    sub("GB-SLK", "South Lanarkshire"),
    sub("GB-SND", "Sunderland"),
    sub("GB-SOL", "Solihull"),
    sub("GB-SOM", "Somerset"),
    sub("GB-SOS", "Southend-on-Sea"),
    sub("GB-SRY", "Surrey"),
    sub("GB-STE", "Stoke-on-Trent"),
    sub("GB-STG", "Stirling"),
    sub("GB-STH", "Southampton"),
    sub("GB-STN", "Sutton"),
    sub("GB-STS", "Staffordshire"),
    sub("GB-STT", "Stockton-on-Tees"),
    sub("GB-STY", "South Tyneside"),
    sub("GB-SWA", "Swansea [Abertawe GB-ATA]"),
    sub("GB-SWD", "Swindon"),
    sub("GB-SWK", "Southwark"),
    sub("GB-TAM", "Tameside"),
    sub("GB-TFW", "Telford and Wrekin"),
    sub("GB-THR", "Thurrock"),
    sub("GB-TOB", "Torbay"),
    sub("GB-TOF", "Torfaen [Tor-faen]"),
    sub("GB-TRF", "Trafford"),
    sub("GB-TWH", "Tower Hamlets"),
    sub("GB-VGL", "Vale of Glamorgan, The [Bro Morgannwg GB-BMG]"),
    sub("GB-WAR", "Warwickshire"),
    sub("GB-WBK", "West Berkshire"),
    sub("GB-WDU", "West Dunbartonshire"),
    sub("GB-WFT", "Waltham Forest"),
    sub("GB-WGN", "Wigan"),
    sub("GB-WIL", "Wiltshire"),
    sub("GB-WKF", "Wakefield"),
    sub("GB-WLL", "Walsall"),
    sub("GB-WLN", "West Lothian"),
    sub("GB-WLS", "Wales [Cymru GB-CYM]"),
    sub("GB-WLV", "Wolverhampton"),
    sub("GB-WND", "Wandsworth"),
    sub("GB-WNM", "Windsor and Maidenhead"),
    sub("GB-WOK", "Wokingham"),
    sub("GB-WOR", "Worcestershire"),
    sub("GB-WRL", "Wirral"),
    sub("GB-WRT", "Warrington"),
    sub("GB-WRX", "Wrexham [Wrecsam GB-WRC]"),
    sub("GB-WSM", "Westminster"),
    sub("GB-WSX", "West Sussex"),
    sub("GB-YOR", "York"),
    sub("GB-ZET", "Shetland Islands"),
    // Grenada
    sub("GD-01", "Saint Andrew"),
    sub("GD-02", "Saint David"),
    sub("GD-03", "Saint George"),
    sub("GD-04", "Saint John"),
    sub("GD-05", "Saint Mark"),
    sub("GD-06", "Saint Patrick"),
    sub("GD-10", "Southern Grenadine Islands"),
    // Georgia
    sub("GE-AB", "Abkhazia"),
    sub("GE-AJ", "Ajaria"),
    sub("GE-GU", "Guria"),
    sub("GE-IM", "Imereti"),
    sub("GE-KA", "K'akheti"),
    sub("GE-KK", "Kvemo Kartli"),
    sub("GE-MM", "Mtskheta-Mtianeti"),
    sub("GE-RL", "Rach'a-Lechkhumi-Kvemo Svaneti"),
    sub("GE-SJ", "Samtskhe-Javakheti"),
    sub("GE-SK", "Shida Kartli"),
    sub("GE-SZ", "Samegrelo-Zemo Svaneti"),
    sub("GE-TB", "Tbilisi"),
    // Ghana
    sub("GH-AA", "Greater Accra"),
    sub("GH-AF", "Ahafo"),
    sub("GH-AH", "Ashanti"),
    sub("GH-BE", "Bono East"),
    sub("GH-BO", "Bono"),
    sub("GH-CP", "Central"),
    sub("GH-EP", "Eastern"),
    sub("GH-NE", "North East"),
    sub("GH-NP", "Northern"),
    sub("GH-OT", "Oti"),
    sub("GH-SV", "Savannah"),
    sub("GH-TV", "Volta"),
    sub("GH-UE", "Upper East"),
    sub("GH-UW", "Upper West"),
    sub("GH-WN", "Western North"),
    sub("GH-WP", "Western"),
    // Greenland
    sub("GL-AV", "Avannaata Kommunia"),
    sub("GL-KU", "Kommune Kujalleq"),
    sub("GL-QE", "Qeqqata Kommunia"),
    sub("GL-QT", "Kommune Qeqertalik"),
    sub("GL-SM", "Kommuneqarfik Sermersooq"),
    // Gambia
    sub("GM-B", "Banjul"),
    sub("GM-L", "Lower River"),
    sub("GM-M", "Central River"),
    sub("GM-N", "North Bank"),
    sub("GM-U", "Upper River"),
    sub("GM-W", "Western"),
    // Guinea
    sub("GN-B", "Boké"),
    sub("GN-BE", "Beyla"),
    sub("GN-BF", "Boffa"),
    sub("GN-BK", "Boké"),
    sub("GN-C", "Conakry"),
    sub("GN-CO", "Coyah"),
    sub("GN-D", "Kindia"),
    sub("GN-DB", "Dabola"),
    sub("GN-DI", "Dinguiraye"),
    sub("GN-DL", "Dalaba"),
    sub("GN-DU", "Dubréka"),
    sub("GN-F", "Faranah"),
    sub("GN-FA", "Faranah"),
    sub("GN-FO", "Forécariah"),
    sub("GN-FR", "Fria"),
    sub("GN-GA", "Gaoual"),
    sub("GN-GU", "Guékédou"),
    sub("GN-K", "Kankan"),
    sub("GN-KA", "Kankan"),
    sub("GN-KB", "Koubia"),
    sub("GN-KD", "Kindia"),
    sub("GN-KE", "Kérouané"),
    sub("GN-KN", "Koundara"),
    sub("GN-KO", "Kouroussa"),
    sub("GN-KS", "Kissidougou"),
    sub("GN-L", "Labé"),
    sub("GN-LA", "Labé"),
    sub("GN-LE", "Lélouma"),
    sub("GN-LO", "Lola"),
    sub("GN-M", "Mamou"),
    sub("GN-MC", "Macenta"),
    sub("GN-MD", "Mandiana"),
    sub("GN-ML", "Mali"),
    sub("GN-MM", "Mamou"),
    sub("GN-N", "Nzérékoré"),
    sub("GN-NZ", "Nzérékoré"),
    sub("GN-PI", "Pita"),
    sub("GN-SI", "Siguiri"),
    sub("GN-TE", "Télimélé"),
    sub("GN-TO", "Tougué"),
    sub("GN-YO", "Yomou"),
    // Equatorial Guinea
    sub("GQ-AN", "Annobon"),
    sub("GQ-BN", "Bioko Nord"),
    sub("GQ-BS", "Bioko Sud"),
    sub("GQ-C", "Região Continental"),
    sub("GQ-CS", "Centro Sud"),
    sub("GQ-DJ", "Djibloho"),
    sub("GQ-I", "Região Insular"),
    sub("GQ-KN", "Kié-Ntem"),
    sub("GQ-LI", "Litoral"),
    sub("GQ-WN", "Wele-Nzas"),
    // Greece
    sub("GR-69", "Ágion Óros"),
    sub("GR-A", "Anatolikí Makedonía kai Thráki"),
    sub("GR-B", "Kentrikí Makedonía"),
    sub("GR-C", "Dytikí Makedonía"),
    sub("GR-D", "Ípeiros"),
    sub("GR-E", "Thessalía"),
    sub("GR-F", "Ionía Nísia"),
    sub("GR-G", "Dytikí Elláda"),
    sub("GR-H", "Stereá Elláda"),
    sub("GR-I", "Attikí"),
    sub("GR-J", "Pelopónnisos"),
    sub("GR-K", "Vóreio Aigaío"),
    sub("GR-L", "Nótio Aigaío"),
    sub("GR-M", "Kríti"),
    // Guatemala
    sub("GT-AV", "Alta Verapaz"),
    sub("GT-BV", "Baja Verapaz"),
    sub("GT-CM", "Chimaltenango"),
    sub("GT-CQ", "Chiquimula"),
    sub("GT-ES", "Escuintla"),
    sub("GT-GU", "Guatemala"),
    sub("GT-HU", "Huehuetenango"),
    sub("GT-IZ", "Izabal"),
    sub("GT-JA", "Jalapa"),
    sub("GT-JU", "Jutiapa"),
    sub("GT-PE", "Petén"),
    sub("GT-PR", "El Progreso"),
    sub("GT-QC", "Quiché"),
    sub("GT-QZ", "Quetzaltenango"),
    sub("GT-RE", "Retalhuleu"),
    sub("GT-SA", "Sacatepéquez"),
    sub("GT-SM", "San Marcos"),
    sub("GT-SO", "Sololá"),
    sub("GT-SR", "Santa Rosa"),
    sub("GT-SU", "Suchitepéquez"),
    sub("GT-TO", "Totonicapán"),
    sub("GT-ZA", "Zacapa"),
    // Guinea-Bissau
    sub("GW-BA", "Bafatá"),
    sub("GW-BL", "Bolama / Bijagós"),
    sub("GW-BM", "Biombo"),
    sub("GW-BS", "Bissau"),
    sub("GW-CA", "Cacheu"),
    sub("GW-GA", "Gabú"),
    sub("GW-L", "Leste"),
    sub("GW-N", "Norte"),
    sub("GW-OI", "Oio"),
    sub("GW-QU", "Quinara"),
    sub("GW-S", "Sul"),
    sub("GW-TO", "Tombali"),
    // Guyana
    sub("GY-BA", "Barima-Waini"),
    sub("GY-CU", "Cuyuni-Mazaruni"),
    sub("GY-DE", "Demerara-Mahaica"),
    sub("GY-EB", "East Berbice-Corentyne"),
    sub("GY-ES", "Essequibo Islands-West Demerara"),
    sub("GY-MA", "Mahaica-Berbice"),
    sub("GY-PM", "Pomeroon-Supenaam"),
    sub("GY-PT", "Potaro-Siparuni"),
    sub("GY-UD", "Upper Demerara-Berbice"),
    sub("GY-UT", "Upper Takutu-Upper Essequibo"),
    // Honduras
    sub("HN-AT", "Atlántida"),
    sub("HN-CH", "Choluteca"),
    sub("HN-CL", "Colón"),
    sub("HN-CM", "Comayagua"),
    sub("HN-CP", "Copán"),
    sub("HN-CR", "Cortés"),
    sub("HN-EP", "El Paraíso"),
    sub("HN-FM", "Francisco Morazán"),
    sub("HN-GD", "Gracias a Dios"),
    sub("HN-IB", "Islas de la Bahía"),
    sub("HN-IN", "Intibucá"),
    sub("HN-LE", "Lempira"),
    sub("HN-LP", "La Paz"),
    sub("HN-OC", "Ocotepeque"),
    sub("HN-OL", "Olancho"),
    sub("HN-SB", "Santa Bárbara"),
    sub("HN-VA", "Valle"),
    sub("HN-YO", "Yoro"),
    // Croatia
    sub("HR-01", "Zagrebačka županija"),
    sub("HR-02", "Krapinsko-zagorska županija"),
    sub("HR-03", "Sisačko-moslavačka županija"),
    sub("HR-04", "Karlovačka županija"),
    sub("HR-05", "Varaždinska županija"),
    sub("HR-06", "Koprivničko-križevačka županija"),
    sub("HR-07", "Bjelovarsko-bilogorska županija"),
    sub("HR-08", "Primorsko-goranska županija"),
    sub("HR-09", "Ličko-senjska županija"),
    sub("HR-10", "Virovitičko-podravska županija"),
    sub("HR-11", "Požeško-slavonska županija"),
    sub("HR-12", "Brodsko-posavska županija"),
    sub("HR-13", "Zadarska županija"),
    sub("HR-14", "Osječko-baranjska županija"),
    sub("HR-15", "Šibensko-kninska županija"),
    sub("HR-16", "Vukovarsko-srijemska županija"),
    sub("HR-17", "Splitsko-dalmatinska županija"),
    sub("HR-18", "Istarska županija"),
    sub("HR-19", "Dubrovačko-neretvanska županija"),
    sub("HR-20", "Međimurska županija"),
    sub("HR-21", "Grad Zagreb"),
    // Haiti
    sub("HT-AR", "Artibonite"),
    sub("HT-CE", "Centre"),
    sub("HT-GA", "Grandans"),
    sub("HT-ND", "Nord"),
    sub("HT-NE", "Nord-Est"),
    sub("HT-NI", "Nip"),
    sub("HT-NO", "Nord-Ouest"),
    sub("HT-OU", "Lwès"),
    sub("HT-SD", "Sid"),
    sub("HT-SE", "Sidès"),
    // Hungary
    sub("HU-BA", "Baranya"),
    sub("HU-BC", "Békéscsaba"),
    sub("HU-BE", "Békés"),
    sub("HU-BK", "Bács-Kiskun"),
    sub("HU-BU", "Budapest"),
    sub("HU-BZ", "Borsod-Abaúj-Zemplén"),
    sub("HU-CS", "Csongrád"),
    sub("HU-DE", "Debrecen"),
    sub("HU-DU", "Dunaújváros"),
    sub("HU-EG", "Eger"),
    sub("HU-ER", "Érd"),
    sub("HU-FE", "Fejér"),
    sub("HU-GS", "Győr-Moson-Sopron"),
    sub("HU-GY", "Győr"),
    sub("HU-HB", "Hajdú-Bihar"),
    sub("HU-HE", "Heves"),
    sub("HU-HV", "Hódmezővásárhely"),
    sub("HU-JN", "Jász-Nagykun-Szolnok"),
    sub("HU-KE", "Komárom-Esztergom"),
    sub("HU-KM", "Kecskemét"),
    sub("HU-KV", "Kaposvár"),
    sub("HU-MI", "Miskolc"),
    sub("HU-NK", "Nagykanizsa"),
    sub("HU-NO", "Nógrád"),
    sub("HU-NY", "Nyíregyháza"),
    sub("HU-PE", "Pest"),
    sub("HU-PS", "Pécs"),
    sub("HU-SD", "Szeged"),
    sub("HU-SF", "Székesfehérvár"),
    sub("HU-SH", "Szombathely"),
    sub("HU-SK", "Szolnok"),
    sub("HU-SN", "Sopron"),
    sub("HU-SO", "Somogy"),
    sub("HU-SS", "Szekszárd"),
    sub("HU-ST", "Salgótarján"),
    sub("HU-SZ", "Szabolcs-Szatmár-Bereg"),
    sub("HU-TB", "Tatabánya"),
    sub("HU-TO", "Tolna"),
    sub("HU-VA", "Vas"),
    sub("HU-VE", "Veszprém"),
    sub("HU-VM", "Veszprém"),
    sub("HU-ZA", "Zala"),
    sub("HU-ZE", "Zalaegerszeg"),
    // Indonesia
    sub("ID-AC", "Aceh"),
    sub("ID-BA", "Bali"),
    sub("ID-BB", "Kepulauan Bangka Belitung"),
    sub("ID-BE", "Bengkulu"),
    sub("ID-BT", "Banten"),
    sub("ID-GO", "Gorontalo"),
    sub("ID-JA", "Jambi"),
    sub("ID-JB", "Jawa Barat"),
    sub("ID-JI", "Jawa Timur"),
    sub("ID-JK", "Jakarta Raya"),
    sub("ID-JT", "Jawa Tengah"),
    sub("ID-JW", "Jawa"),
    sub("ID-KA", "Kalimantan"),
    sub("ID-KB", "Kalimantan Barat"),
    sub("ID-KI", "Kalimantan Timur"),
    sub("ID-KR", "Kepulauan Riau"),
    sub("ID-KS", "Kalimantan Selatan"),
    sub("ID-KT", "Kalimantan Tengah"),
    sub("ID-KU", "Kalimantan Utara"),
    sub("ID-LA", "Lampung"),
    sub("ID-MA", "Maluku"),
    sub("ID-ML", "Maluku"),
    sub("ID-MU", "Maluku Utara"),
    sub("ID-NB", "Nusa Tenggara Barat"),
    sub("ID-NT", "Nusa Tenggara Timur"),
    sub("ID-NU", "Nusa Tenggara"),
    sub("ID-PA", "Papua"),
    sub("ID-PB", "Papua Barat"),
    sub("ID-PP", "Papua"),
    sub("ID-RI", "Riau"),
    sub("ID-SA", "Sulawesi Utara"),
    sub("ID-SB", "Sumatera Barat"),
    sub("ID-SG", "Sulawesi Tenggara"),
    sub("ID-SL", "Sulawesi"),
    sub("ID-SM", "Sumatera"),
    sub("ID-SN", "Sulawesi Selatan"),
    sub("ID-SR", "Sulawesi Barat"),
    sub("ID-SS", "Sumatera Selatan"),
    sub("ID-ST", "Sulawesi Tengah"),
    sub("ID-SU", "Sumatera Utara"),
    sub("ID-YO", "Yogyakarta"),
    // Ireland
    sub("IE-C", "Connaught"),
    sub("IE-CE", "Clare"),
    sub("IE-CN", "Cavan"),
    sub("IE-CO", "Cork"),
    sub("IE-CW", "Carlow"),
    sub("IE-D", "Dublin"),
    sub("IE-DL", "Donegal"),
    sub("IE-G", "Galway"),
    sub("IE-KE", "Kildare"),
    sub("IE-KK", "Kilkenny"),
    sub("IE-KY", "Kerry"),
    sub("IE-L", "Leinster"),
    sub("IE-LD", "Longford"),
    sub("IE-LH", "Louth"),
    sub("IE-LK", "Limerick"),
    sub("IE-LM", "Leitrim"),
    sub("IE-LS", "Laois"),
    sub("IE-M", "Munster"),
    sub("IE-MH", "Meath"),
    sub("IE-MN", "Monaghan"),
    sub("IE-MO", "Mayo"),
    sub("IE-OY", "Offaly"),
    sub("IE-RN", "Roscommon"),
    sub("IE-SO", "Sligo"),
    sub("IE-TA", "Tipperary"),
    sub("IE-U", "Ulster"),
    sub("IE-WD", "Waterford"),
    sub("IE-WH", "Westmeath"),
    sub("IE-WW", "Wicklow"),
    sub("IE-WX", "Wexford"),
    // Israel
    sub("IL-D", "Al Janūbī"),
    sub("IL-HA", "H̱efa"),
    sub("IL-JM", "Al Quds"),
    sub("IL-M", "Al Awsaţ"),
    sub("IL-TA", "Tall Abīb"),
    sub("IL-Z", "Ash Shamālī"),
    // India
    sub("IN-AN", "Andaman and Nicobar Islands"),
    sub("IN-AP", "Andhra Pradesh"),
    sub("IN-AR", "Arunāchal Pradesh"),
    sub("IN-AS", "Assam"),
    sub("IN-BR", "Bihār"),
    sub("IN-CH", "Chandīgarh"),
    sub("IN-CT", "Chhattīsgarh"),
    sub("IN-DH", "Dādra and Nagar Haveli and Damān and Diu"),
    sub("IN-DL", "Delhi"),
    sub("IN-GA", "Goa"),
    sub("IN-GJ", "Gujarāt"),
    sub("IN-HP", "Himāchal Pradesh"),
    sub("IN-HR", "Haryāna"),
    sub("IN-JH", "Jhārkhand"),
    sub("IN-JK", "Jammu and Kashmīr"),
    sub("IN-KA", "Karnātaka"),
    sub("IN-KL", "Kerala"),
    sub("IN-LA", "Ladākh"),
    sub("IN-LD", "Lakshadweep"),
    sub("IN-MH", "Mahārāshtra"),
    sub("IN-ML", "Meghālaya"),
    sub("IN-MN", "Manipur"),
    sub("IN-MP", "Madhya Pradesh"),
    sub("IN-MZ", "Mizoram"),
    sub("IN-NL", "Nāgāland"),
    sub("IN-OR", "Odisha"),
    sub("IN-PB", "Punjab"),
    sub("IN-PY", "Puducherry"),
    sub("IN-RJ", "Rājasthān"),
    sub("IN-SK", "Sikkim"),
    sub("IN-TG", "Telangāna"),
    sub("IN-TN", "Tamil Nādu"),
    sub("IN-TR", "Tripura"),
    sub("IN-UP", "Uttar Pradesh"),
    sub("IN-UT", "Uttarākhand"),
    sub("IN-WB", "West Bengal"),
    // Iraq
    sub("IQ-AN", "Al Anbār"),
    sub("IQ-AR", "Arbīl"),
    sub("IQ-BA", "Al Başrah"),
    sub("IQ-BB", "Bābil"),
    sub("IQ-BG", "Baghdād"),
    sub("IQ-DA", "Dahūk"),
    sub("IQ-DI", "Diyālá"),
    sub("IQ-DQ", "Dhī Qār"),
    sub("IQ-KA", "Karbalā’"),
    sub("IQ-KI", "Kirkūk"),
    sub("IQ-MA", "Maysān"),
    sub("IQ-MU", "Al Muthanná"),
    sub("IQ-NA", "An Najaf"),
    sub("IQ-NI", "Nīnawá"),
    sub("IQ-QA", "Al Qādisīyah"),
    sub("IQ-SD", "Şalāḩ ad Dīn"),
    sub("IQ-SU", "As Sulaymānīyah"),
    sub("IQ-WA", "Wāsiţ"),
    // Iran, Islamic Republic of
    sub("IR-00", "Markazī"),
    sub("IR-01", "Gīlān"),
    sub("IR-02", "Māzandarān"),
    sub("IR-03", "Āz̄ārbāyjān-e Shārqī"),
    sub("IR-04", "Āz̄ārbāyjān-e Ghārbī"),
    sub("IR-05", "Kermānshāh"),
    sub("IR-06", "Khūzestān"),
    sub("IR-07", "Fārs"),
    sub("IR-08", "Kermān"),
    sub("IR-09", "Khorāsān-e Raẕavī"),
    sub("IR-10", "Eşfahān"),
    sub("IR-11", "Sīstān va Balūchestān"),
    sub("IR-12", "Kordestān"),
    sub("IR-13", "Hamadān"),
    sub("IR-14", "Chahār Maḩāl va Bakhtīārī"),
    sub("IR-15", "Lorestān"),
    sub("IR-16", "Īlām"),
    sub("IR-17", "Kohgīlūyeh va Bowyer Aḩmad"),
    sub("IR-18", "Būshehr"),
    sub("IR-19", "Zanjān"),
    sub("IR-20", "Semnān"),
    sub("IR-21", "Yazd"),
    sub("IR-22", "Hormozgān"),
    sub("IR-23", "Tehrān"),
    sub("IR-24", "Ardabīl"),
    sub("IR-25", "Qom"),
    sub("IR-26", "Qazvīn"),
    sub("IR-27", "Golestān"),
    sub("IR-28", "Khorāsān-e Shomālī"),
    sub("IR-29", "Khorāsān-e Jonūbī"),
    sub("IR-30", "Alborz"),
    // Iceland
    sub("IS-1", "Höfuðborgarsvæði"),
    sub("IS-2", "Suðurnes"),
    sub("IS-3", "Vesturland"),
    sub("IS-4", "Vestfirðir"),
    sub("IS-5", "Norðurland vestra"),
    sub("IS-6", "Norðurland eystra"),
    sub("IS-7", "Austurland"),
    sub("IS-8", "Suðurland"),
    sub("IS-AKH", "Akrahreppur"),
    sub("IS-AKN", "Akraneskaupstaður"),
    sub("IS-AKU", "Akureyrarbær"),
    sub("IS-ARN", "Árneshreppur"),
    sub("IS-ASA", "Ásahreppur"),
    sub("IS-BFJ", "Borgarfjarðarhreppur"),
    sub("IS-BLA", "Bláskógabyggð"),
    sub("IS-BLO", "Blönduósbær"),
    sub("IS-BOG", "Borgarbyggð"),
    sub("IS-BOL", "Bolungarvíkurkaupstaður"),
    sub("IS-DAB", "Dalabyggð"),
    sub("IS-DAV", "Dalvíkurbyggð"),
    sub("IS-DJU", "Djúpavogshreppur"),
    sub("IS-EOM", "Eyja- og Miklaholtshreppur"),
    sub("IS-EYF", "Eyjafjarðarsveit"),
    sub("IS-FJD", "Fjarðabyggð"),
    sub("IS-FJL", "Fjallabyggð"),
    sub("IS-FLA", "Flóahreppur"),
    sub("IS-FLD", "Fljótsdalshérað"),
    sub("IS-FLR", "Fljótsdalshreppur"),
    sub("IS-GAR", "Garðabær"),
    sub("IS-GOG", "Grímsnes- og Grafningshreppur"),
    sub("IS-GRN", "Grindavíkurbær"),
    sub("IS-GRU", "Grundarfjarðarbær"),
    sub("IS-GRY", "Grýtubakkahreppur"),
    sub("IS-HAF", "Hafnarfjarðarkaupstaður"),
    sub("IS-HEL", "Helgafellssveit"),
    sub("IS-HRG", "Hörgársveit"),
    sub("IS-HRU", "Hrunamannahreppur"),
    sub("IS-HUT", "Húnavatnshreppur"),
    sub("IS-HUV", "Húnaþing vestra"),
    sub("IS-HVA", "Hvalfjarðarsveit"),
    sub("IS-HVE", "Hveragerðisbær"),
    sub("IS-ISA", "Ísafjarðarbær"),
    sub("IS-KAL", "Kaldrananeshreppur"),
    sub("IS-KJO", "Kjósarhreppur"),
    sub("IS-KOP", "Kópavogsbær"),
    sub("IS-LAN", "Langanesbyggð"),
    sub("IS-MOS", "Mosfellsbær"),
    sub("IS-MYR", "Mýrdalshreppur"),
    sub("IS-NOR", "Norðurþing"),
    sub("IS-RGE", "Rangárþing eystra"),
    sub("IS-RGY", "Rangárþing ytra"),
    sub("IS-RHH", "Reykhólahreppur"),
    sub("IS-RKN", "Reykjanesbær"),
    sub("IS-RKV", "Reykjavíkurborg"),
    sub("IS-SBH", "Svalbarðshreppur"),
    sub("IS-SBT", "Svalbarðsstrandarhreppur"),
    sub("IS-SDN", "Suðurnesjabær"),
    sub("IS-SDV", "Súðavíkurhreppur"),
    sub("IS-SEL", "Seltjarnarnesbær"),
    sub("IS-SEY", "Seyðisfjarðarkaupstaður"),
    sub("IS-SFA", "Sveitarfélagið Árborg"),
    sub("IS-SHF", "Sveitarfélagið Hornafjörður"),
    sub("IS-SKF", "Skaftárhreppur"),
    sub("IS-SKG", "Skagabyggð"),
    sub("IS-SKO", "Skorradalshreppur"),
    sub("IS-SKU", "Skútustaðahreppur"),
    sub("IS-SNF", "Snæfellsbær"),
    sub("IS-SOG", "Skeiða- og Gnúpverjahreppur"),
    sub("IS-SOL", "Sveitarfélagið Ölfus"),
    sub("IS-SSF", "Sveitarfélagið Skagafjörður"),
    sub("IS-SSS", "Sveitarfélagið Skagaströnd"),
    sub("IS-STR", "Strandabyggð"),
    sub("IS-STY", "Stykkishólmsbær"),
    sub("IS-SVG", "Sveitarfélagið Vogar"),
    sub("IS-TAL", "Tálknafjarðarhreppur"),
    sub("IS-THG", "Þingeyjarsveit"),
    sub("IS-TJO", "Tjörneshreppur"),
    sub("IS-VEM", "Vestmannaeyjabær"),
    sub("IS-VER", "Vesturbyggð"),
    sub("IS-VOP", "Vopnafjarðarhreppur"),
    // Italy
    sub("IT-21", "Piemonte"),
    sub("IT-23", "Val d'Aoste"),
    sub("IT-25", "Lombardia"),
    sub("IT-32", "Trentino-Alto Adige"),
    sub("IT-34", "Veneto"),
    sub("IT-36", "Friuli Venezia Giulia"),
    sub("IT-42", "Liguria"),
    sub("IT-45", "Emilia-Romagna"),
    sub("IT-52", "Toscana"),
    sub("IT-55", "Umbria"),
    sub("IT-57", "Marche"),
    sub("IT-62", "Lazio"),
    sub("IT-65", "Abruzzo"),
    sub("IT-67", "Molise"),
    sub("IT-72", "Campania"),
    sub("IT-75", "Puglia"),
    sub("IT-77", "Basilicata"),
    sub("IT-78", "Calabria"),
    sub("IT-82", "Sicilia"),
    sub("IT-88", "Sardegna"),
    sub("IT-AG", "Agrigento"),
    sub("IT-AL", "Alessandria"),
    sub("IT-AN", "Ancona"),
    sub("IT-AP", "Ascoli Piceno"),
    sub("IT-AQ", "L'Aquila"),
    sub("IT-AR", "Arezzo"),
    sub("IT-AT", "Asti"),
    sub("IT-AV", "Avellino"),
    sub("IT-BA", "Bari"),
    sub("IT-BG", "Bergamo"),
    sub("IT-BI", "Biella"),
    sub("IT-BL", "Belluno"),
    sub("IT-BN", "Benevento"),
    sub("IT-BO", "Bologna"),
    sub("IT-BR", "Brindisi"),
    sub("IT-BS", "Brescia"),
    sub("IT-BT", "Barletta-Andria-Trani"),
    sub("IT-BZ", "Bolzano"),
    sub("IT-CA", "Cagliari"),
    sub("IT-CB", "Campobasso"),
    sub("IT-CE", "Caserta"),
    sub("IT-CH", "Chieti"),
    sub("IT-CL", "Caltanissetta"),
    sub("IT-CN", "Cuneo"),
    sub("IT-CO", "Como"),
    sub("IT-CR", "Cremona"),
    sub("IT-CS", "Cosenza"),
    sub("IT-CT", "Catania"),
    sub("IT-CZ", "Catanzaro"),
    sub("IT-EN", "Enna"),
    sub("IT-FC", "Forlì-Cesena"),
    sub("IT-FE", "Ferrara"),
    sub("IT-FG", "Foggia"),
    sub("IT-FI", "Firenze"),
    sub("IT-FM", "Fermo"),
    sub("IT-FR", "Frosinone"),
    sub("IT-GE", "Genova"),
    sub("IT-GO", "Gorizia"),
    sub("IT-GR", "Grosseto"),
    sub("IT-IM", "Imperia"),
    sub("IT-IS", "Isernia"),
    sub("IT-KR", "Crotone"),
    sub("IT-LC", "Lecco"),
    sub("IT-LE", "Lecce"),
    sub("IT-LI", "Livorno"),
    sub("IT-LO", "Lodi"),
    sub("IT-LT", "Latina"),
    sub("IT-LU", "Lucca"),
    sub("IT-MB", "Monza e Brianza"),
    sub("IT-MC", "Macerata"),
    sub("IT-ME", "Messina"),
    sub("IT-MI", "Milano"),
    sub("IT-MN", "Mantova"),
    sub("IT-MO", "Modena"),
    sub("IT-MS", "Massa-Carrara"),
    sub("IT-MT", "Matera"),
    sub("IT-NA", "Napoli"),
    sub("IT-NO", "Novara"),
    sub("IT-NU", "Nuoro"),
    sub("IT-OR", "Oristano"),
    sub("IT-PA", "Palermo"),
    sub("IT-PC", "Piacenza"),
    sub("IT-PD", "Padova"),
    sub("IT-PE", "Pescara"),
    sub("IT-PG", "Perugia"),
    sub("IT-PI", "Pisa"),
    sub("IT-PN", "Pordenone"),
    sub("IT-PO", "Prato"),
    sub("IT-PR", "Parma"),
    sub("IT-PT", "Pistoia"),
    sub("IT-PU", "Pesaro e Urbino"),
    sub("IT-PV", "Pavia"),
    sub("IT-PZ", "Potenza"),
    sub("IT-RA", "Ravenna"),
    sub("IT-RC", "Reggio Calabria"),
    sub("IT-RE", "Reggio Emilia"),
    sub("IT-RG", "Ragusa"),
    sub("IT-RI", "Rieti"),
    sub("IT-RM", "Roma"),
    sub("IT-RN", "Rimini"),
    sub("IT-RO", "Rovigo"),
    sub("IT-SA", "Salerno"),
    sub("IT-SI", "Siena"),
    sub("IT-SO", "Sondrio"),
    sub("IT-SP", "La Spezia"),
    sub("IT-SR", "Siracusa"),
    sub("IT-SS", "Sassari"),
    sub("IT-SU", "Sud Sardegna"),
    sub("IT-SV", "Savona"),
    sub("IT-TA", "Taranto"),
    sub("IT-TE", "Teramo"),
    sub("IT-TN", "Trento"),
    sub("IT-TO", "Torino"),
    sub("IT-TP", "Trapani"),
    sub("IT-TR", "Terni"),
    sub("IT-TS", "Trieste"),
    sub("IT-TV", "Treviso"),
    sub("IT-UD", "Udine"),
    sub("IT-VA", "Varese"),
    sub("IT-VB", "Verbano-Cusio-Ossola"),
    sub("IT-VC", "Vercelli"),
    sub("IT-VE", "Venezia"),
    sub("IT-VI", "Vicenza"),
    sub("IT-VR", "Verona"),
    sub("IT-VT", "Viterbo"),
    sub("IT-VV", "Vibo Valentia"),
    // Jamaica
    sub("JM-01", "Kingston"),
    sub("JM-02", "Saint Andrew"),
    sub("JM-03", "Saint Thomas"),
    sub("JM-04", "Portland"),
    sub("JM-05", "Saint Mary"),
    sub("JM-06", "Saint Ann"),
    sub("JM-07", "Trelawny"),
    sub("JM-08", "Saint James"),
    sub("JM-09", "Hanover"),
    sub("JM-10", "Westmoreland"),
    sub("JM-11", "Saint Elizabeth"),
    sub("JM-12", "Manchester"),
    sub("JM-13", "Clarendon"),
    sub("JM-14", "Saint Catherine"),
    // Jordan
    sub("JO-AJ", "‘Ajlūn"),
    sub("JO-AM", "Al ‘A̅şimah"),
    sub("JO-AQ", "Al ‘Aqabah"),
    sub("JO-AT", "Aţ Ţafīlah"),
    sub("JO-AZ", "Az Zarqā’"),
    sub("JO-BA", "Al Balqā’"),
    sub("JO-IR", "Irbid"),
    sub("JO-JA", "Jarash"),
    sub("JO-KA", "Al Karak"),
    sub("JO-MA", "Al Mafraq"),
    sub("JO-MD", "Mādabā"),
    sub("JO-MN", "Ma‘ān"),
    // Japan
    sub("JP-01", "Hokkaido"),
    sub("JP-02", "Aomori"),
    sub("JP-03", "Iwate"),
    sub("JP-04", "Miyagi"),
    sub("JP-05", "Akita"),
    sub("JP-06", "Yamagata"),
    sub("JP-07", "Fukushima"),
    sub("JP-08", "Ibaraki"),
    sub("JP-09", "Tochigi"),
    sub("JP-10", "Gunma"),
    sub("JP-11", "Saitama"),
    sub("JP-12", "Chiba"),
    sub("JP-13", "Tokyo"),
    sub("JP-14", "Kanagawa"),
    sub("JP-15", "Niigata"),
    sub("JP-16", "Toyama"),
    sub("JP-17", "Ishikawa"),
    sub("JP-18", "Fukui"),
    sub("JP-19", "Yamanashi"),
    sub("JP-20", "Nagano"),
    sub("JP-21", "Gifu"),
    sub("JP-22", "Shizuoka"),
    sub("JP-23", "Aichi"),
    sub("JP-24", "Mie"),
    sub("JP-25", "Shiga"),
    sub("JP-26", "Kyoto"),
    sub("JP-27", "Osaka"),
    sub("JP-28", "Hyogo"),
    sub("JP-29", "Nara"),
    sub("JP-30", "Wakayama"),
    sub("JP-31", "Tottori"),
    sub("JP-32", "Shimane"),
    sub("JP-33", "Okayama"),
    sub("JP-34", "Hiroshima"),
    sub("JP-35", "Yamaguchi"),
    sub("JP-36", "Tokushima"),
    sub("JP-37", "Kagawa"),
    sub("JP-38", "Ehime"),
    sub("JP-39", "Kochi"),
    sub("JP-40", "Fukuoka"),
    sub("JP-41", "Saga"),
    sub("JP-42", "Nagasaki"),
    sub("JP-43", "Kumamoto"),
    sub("JP-44", "Oita"),
    sub("JP-45", "Miyazaki"),
    sub("JP-46", "Kagoshima"),
    sub("JP-47", "Okinawa"),
    // Kenya
    sub("KE-01", "Baringo"),
    sub("KE-02", "Bomet"),
    sub("KE-03", "Bungoma"),
    sub("KE-04", "Busia"),
    sub("KE-05", "Elgeyo/Marakwet"),
    sub("KE-06", "Embu"),
    sub("KE-07", "Garissa"),
    sub("KE-08", "Homa Bay"),
    sub("KE-09", "Isiolo"),
    sub("KE-10", "Kajiado"),
    sub("KE-11", "Kakamega"),
    sub("KE-12", "Kericho"),
    sub("KE-13", "Kiambu"),
    sub("KE-14", "Kilifi"),
    sub("KE-15", "Kirinyaga"),
    sub("KE-16", "Kisii"),
    sub("KE-17", "Kisumu"),
    sub("KE-18", "Kitui"),
    sub("KE-19", "Kwale"),
    sub("KE-20", "Laikipia"),
    sub("KE-21", "Lamu"),
    sub("KE-22", "Machakos"),
    sub("KE-23", "Makueni"),
    sub("KE-24", "Mandera"),
    sub("KE-25", "Marsabit"),
    sub("KE-26", "Meru"),
    sub("KE-27", "Migori"),
    sub("KE-28", "Mombasa"),
    sub("KE-29", "Murang'a"),
    sub("KE-30", "Nairobi City"),
    sub("KE-31", "Nakuru"),
    sub("KE-32", "Nandi"),
    sub("KE-33", "Narok"),
    sub("KE-34", "Nyamira"),
    sub("KE-35", "Nyandarua"),
    sub("KE-36", "Nyeri"),
    sub("KE-37", "Samburu"),
    sub("KE-38", "Siaya"),
    sub("KE-39", "Taita/Taveta"),
    sub("KE-40", "Tana River"),
    sub("KE-41", "Tharaka-Nithi"),
    sub("KE-42", "Trans Nzoia"),
    sub("KE-43", "Turkana"),
    sub("KE-44", "Uasin Gishu"),
    sub("KE-45", "Vihiga"),
    sub("KE-46", "Wajir"),
    sub("KE-47", "West Pokot"),
    // Kyrgyzstan
    sub("KG-B", "Batken"),
    sub("KG-C", "Chuyskaya oblast'"),
    sub("KG-GB", "Bishkek Shaary"),
    sub("KG-GO", "Gorod Osh"),
    sub("KG-J", "Dzhalal-Abadskaya oblast'"),
    sub("KG-N", "Naryn"),
    sub("KG-O", "Osh"),
    sub("KG-T", "Talas"),
    sub("KG-Y", "Issyk-Kul'skaja oblast'"),
    // Cambodia
    sub("KH-1", "Banteay Mean Choăy"),
    sub("KH-10", "Kracheh"),
    sub("KH-11", "Mondol Kiri"),
    sub("KH-12", "Phnom Penh"),
    sub("KH-13", "Preah Vihear"),
    sub("KH-14", "Prey Veaeng"),
    sub("KH-15", "Pousaat"),
    sub("KH-16", "Rotanak Kiri"),
    sub("KH-17", "Siem Reab"),
    sub("KH-18", "Preah Sihanouk"),
    sub("KH-19", "Stoĕng Trêng"),
    sub("KH-2", "Baat Dambang"),
    sub("KH-20", "Svaay Rieng"),
    sub("KH-21", "Taakaev"),
    sub("KH-22", "Otdar Mean Chey"),
    sub("KH-23", "Kaeb"),
    sub("KH-24", "Pailin"),
    sub("KH-25", "Tbong Khmum"),
    sub("KH-3", "Kampong Chaam"),
    sub("KH-4", "Kampong Chhnang"),
    sub("KH-5", "Kampong Spueu"),
    sub("KH-6", "Kampong Thum"),
    sub("KH-7", "Kampot"),
    sub("KH-8", "Kandaal"),
    sub("KH-9", "Kaoh Kong"),
    // Kiribati
    sub("KI-G", "Gilbert Islands"),
    sub("KI-L", "Line Islands"),
    sub("KI-P", "Phoenix Islands"),
    // Comoros
    sub("KM-A", "Andjouân"),
    sub("KM-G", "Andjazîdja"),
    sub("KM-M", "Mohéli"),
    // Saint Kitts and Nevis
    sub("KN-01", "Christ Church Nichola Town"),
    sub("KN-02", "Saint Anne Sandy Point"),
    sub("KN-03", "Saint George Basseterre"),
    sub("KN-04", "Saint George Gingerland"),
    sub("KN-05", "Saint James Windward"),
    sub("KN-06", "Saint John Capisterre"),
    sub("KN-07", "Saint John Figtree"),
    sub("KN-08", "Saint Mary Cayon"),
    sub("KN-09", "Saint Paul Capisterre"),
    sub("KN-10", "Saint Paul Charlestown"),
    sub("KN-11", "Saint Peter Basseterre"),
    sub("KN-12", "Saint Thomas Lowland"),
    sub("KN-13", "Saint Thomas Middle Island"),
    sub("KN-15", "Trinity Palmetto Point"),
    sub("KN-K", "Saint Kitts"),
    sub("KN-N", "Nevis"),
    // Korea, Democratic People's Republic of
    sub("KP-01", "P'yǒngyang"),
    sub("KP-02", "P'yǒngan-namdo"),
    sub("KP-03", "P'yǒngan-bukto"),
    sub("KP-04", "Chagang-do"),
    sub("KP-05", "Hwanghae-namdo"),
    sub("KP-06", "Hwanghae-bukto"),
    sub("KP-07", "Kangweonto"),
    sub("KP-08", "Hamgyǒng-namdo"),
    sub("KP-09", "Hamgyǒng-bukto"),
    sub("KP-10", "Ryanggang-do"),
    sub("KP-13", "Raseon"),
    sub("KP-14", "Nampho"),
    // Korea, Republic of
    sub("KR-11", "Seoul-teukbyeolsi"),
    sub("KR-26", "Busan-gwangyeoksi"),
    sub("KR-27", "Daegu-gwangyeoksi"),
    sub("KR-28", "Incheon-gwangyeoksi"),
    sub("KR-29", "Gwangju-gwangyeoksi"),
    sub("KR-30", "Daejeon-gwangyeoksi"),
    sub("KR-31", "Ulsan-gwangyeoksi"),
    sub("KR-41", "Gyeonggi-do"),
    sub("KR-42", "Gangwon-do"),
    sub("KR-43", "Chungcheongbuk-do"),
    sub("KR-44", "Chungcheongnam-do"),
    sub("KR-45", "Jeollabuk-do"),
    sub("KR-46", "Jeollanam-do"),
    sub("KR-47", "Gyeongsangbuk-do"),
    sub("KR-48", "Gyeongsangnam-do"),
    sub("KR-49", "Jeju-teukbyeoljachido"),
    sub("KR-50", "Sejong"),
    // Kuwait
    sub("KW-AH", "Al Aḩmadī"),
    sub("KW-FA", "Al Farwānīyah"),
    sub("KW-HA", "Ḩawallī"),
    sub("KW-JA", "Al Jahrā’"),
    sub("KW-KU", "Al ‘Āşimah"),
    sub("KW-MU", "Mubārak al Kabīr"),
    // Kazakhstan
    sub("KZ-AKM", "Akmolinskaja oblast'"),
    sub("KZ-AKT", "Aktjubinskaja oblast'"),
    sub("KZ-ALA", "Almaty"),
    sub("KZ-ALM", "Almatinskaja oblast'"),
    sub("KZ-AST", "Nur-Sultan"),
    sub("KZ-ATY", "Atyrauskaja oblast'"),
    sub("KZ-KAR", "Karagandinskaja oblast'"),
    sub("KZ-KUS", "Kostanajskaja oblast'"),
    sub("KZ-KZY", "Kyzylordinskaja oblast'"),
    sub("KZ-MAN", "Mangghystaū oblysy"),
    sub("KZ-PAV", "Pavlodar oblysy"),
    sub("KZ-SEV", "Severo-Kazahstanskaja oblast'"),
    sub("KZ-SHY", "Shymkent"),
    sub("KZ-VOS", "Shyghys Qazaqstan oblysy"),
    sub("KZ-YUZ", "Turkestankaya oblast'"),
    sub("KZ-ZAP", "Batys Qazaqstan oblysy"),
    sub("KZ-ZHA", "Zhambyl oblysy"),
    // Lao People's Democratic Republic
    sub("LA-AT", "Attapu"),
    sub("LA-BK", "Bokèo"),
    sub("LA-BL", "Bolikhamxai"),
    sub("LA-CH", "Champasak"),
    sub("LA-HO", "Houaphan"),
    sub("LA-KH", "Khammouan"),
    sub("LA-LM", "Louang Namtha"),
    sub("LA-LP", "Louangphabang"),
    sub("LA-OU", "Oudômxai"),
    sub("LA-PH", "Phôngsali"),
    sub("LA-SL", "Salavan"),
    sub("LA-SV", "Savannakhét"),
    sub("LA-VI", "Viangchan"),
    sub("LA-VT", "Viangchan"),
    sub("LA-XA", "Xaignabouli"),
    sub("LA-XE", "Xékong"),
    sub("LA-XI", "Xiangkhouang"),
    sub("LA-XS", "Xaisômboun"),
    // Lebanon
    sub("LB-AK", "Aakkâr"),
    sub("LB-AS", "Ash Shimāl"),
    sub("LB-BA", "Bayrūt"),
    sub("LB-BH", "Baalbek-Hermel"),
    sub("LB-BI", "Al Biqā‘"),
    sub("LB-JA", "Al Janūb"),
    sub("LB-JL", "Jabal Lubnān"),
    sub("LB-NA", "An Nabaţīyah"),
    // Saint Lucia
    sub("LC-01", "Anse la Raye"),
    sub("LC-02", "Castries"),
    sub("LC-03", "Choiseul"),
    sub("LC-05", "Dennery"),
    sub("LC-06", "Gros Islet"),
    sub("LC-07", "Laborie"),
    sub("LC-08", "Micoud"),
    sub("LC-10", "Soufrière"),
    sub("LC-11", "Vieux Fort"),
    sub("LC-12", "Canaries"),
    // Liechtenstein
    sub("LI-01", "Balzers"),
    sub("LI-02", "Eschen"),
    sub("LI-03", "Gamprin"),
    sub("LI-04", "Mauren"),
    sub("LI-05", "Planken"),
    sub("LI-06", "Ruggell"),
    sub("LI-07", "Schaan"),
    sub("LI-08", "Schellenberg"),
    sub("LI-09", "Triesen"),
    sub("LI-10", "Triesenberg"),
    sub("LI-11", "Vaduz"),
    // Sri Lanka
    sub("LK-1", "Western Province"),
    sub("LK-11", "Colombo"),
    sub("LK-12", "Gampaha"),
    sub("LK-13", "Kalutara"),
    sub("LK-2", "Central Province"),
    sub("LK-21", "Kandy"),
    sub("LK-22", "Matale"),
    sub("LK-23", "Nuwara Eliya"),
    sub("LK-3", "Southern Province"),
    sub("LK-31", "Galle"),
    sub("LK-32", "Matara"),
    sub("LK-33", "Hambantota"),
    sub("LK-4", "Northern Province"),
    sub("LK-41", "Jaffna"),
    sub("LK-42", "Kilinochchi"),
    sub("LK-43", "Mannar"),
    sub("LK-44", "Vavuniya"),
    sub("LK-45", "Mullaittivu"),
    sub("LK-5", "Eastern Province"),
    sub("LK-51", "Batticaloa"),
    sub("LK-52", "Ampara"),
    sub("LK-53", "Trincomalee"),
    sub("LK-6", "North Western Province"),
    sub("LK-61", "Kurunegala"),
    sub("LK-62", "Puttalam"),
    sub("LK-7", "North Central Province"),
    sub("LK-71", "Anuradhapura"),
    sub("LK-72", "Polonnaruwa"),
    sub("LK-8", "Uva Province"),
    sub("LK-81", "Badulla"),
    sub("LK-82", "Monaragala"),
    sub("LK-9", "Sabaragamuwa Province"),
    sub("LK-91", "Ratnapura"),
    sub("LK-92", "Kegalla"),
    // Liberia
    sub("LR-BG", "Bong"),
    sub("LR-BM", "Bomi"),
    sub("LR-CM", "Grand Cape Mount"),
    sub("LR-GB", "Grand Bassa"),
    sub("LR-GG", "Grand Gedeh"),
    sub("LR-GK", "Grand Kru"),
    sub("LR-GP", "Gbarpolu"),
    sub("LR-LO", "Lofa"),
    sub("LR-MG", "Margibi"),
    sub("LR-MO", "Montserrado"),
    sub("LR-MY", "Maryland"),
    sub("LR-NI", "Nimba"),
    sub("LR-RG", "River Gee"),
    sub("LR-RI", "River Cess"),
    sub("LR-SI", "Sinoe"),
    // Lesotho
    sub("LS-A", "Maseru"),
    sub("LS-B", "Botha-Bothe"),
    sub("LS-C", "Leribe"),
    sub("LS-D", "Berea"),
    sub("LS-E", "Mafeteng"),
    sub("LS-F", "Mohale's Hoek"),
    sub("LS-G", "Quthing"),
    sub("LS-H", "Qacha's Nek"),
    sub("LS-J", "Mokhotlong"),
    sub("LS-K", "Thaba-Tseka"),
    // Lithuania
    sub("LT-01", "Akmenė"),
    sub("LT-02", "Alytaus miestas"),
    sub("LT-03", "Alytus"),
    sub("LT-04", "Anykščiai"),
    sub("LT-05", "Birštono"),
    sub("LT-06", "Biržai"),
    sub("LT-07", "Druskininkai"),
    sub("LT-08", "Elektrėnai"),
    sub("LT-09", "Ignalina"),
    sub("LT-10", "Jonava"),
    sub("LT-11", "Joniškis"),
    sub("LT-12", "Jurbarkas"),
    sub("LT-13", "Kaišiadorys"),
    sub("LT-14", "Kalvarijos"),
    sub("LT-15", "Kauno miestas"),
    sub("LT-16", "Kaunas"),
    sub("LT-17", "Kazlų Rūdos"),
    sub("LT-18", "Kėdainiai"),
    sub("LT-19", "Kelmė"),
    sub("LT-20", "Klaipėdos miestas"),
    sub("LT-21", "Klaipėda"),
    sub("LT-22", "Kretinga"),
    sub("LT-23", "Kupiškis"),
    sub("LT-24", "Lazdijai"),
    sub("LT-25", "Marijampolė"),
    sub("LT-26", "Mažeikiai"),
    sub("LT-27", "Molėtai"),
    sub("LT-28", "Neringa"),
    sub("LT-29", "Pagėgiai"),
    sub("LT-30", "Pakruojis"),
    sub("LT-31", "Palangos miestas"),
    sub("LT-32", "Panevėžio miestas"),
    sub("LT-33", "Panevėžys"),
    sub("LT-34", "Pasvalys"),
    sub("LT-35", "Plungė"),
    sub("LT-36", "Prienai"),
    sub("LT-37", "Radviliškis"),
    sub("LT-38", "Raseiniai"),
    sub("LT-39", "Rietavo"),
    sub("LT-40", "Rokiškis"),
    sub("LT-41", "Šakiai"),
    sub("LT-42", "Šalčininkai"),
    sub("LT-43", "Šiaulių miestas"),
    sub("LT-44", "Šiauliai"),
    sub("LT-45", "Šilalė"),
    sub("LT-46", "Šilutė"),
    sub("LT-47", "Širvintos"),
    sub("LT-48", "Skuodas"),
    sub("LT-49", "Švenčionys"),
    sub("LT-50", "Tauragė"),
    sub("LT-51", "Telšiai"),
    sub("LT-52", "Trakai"),
    sub("LT-53", "Ukmergė"),
    sub("LT-54", "Utena"),
    sub("LT-55", "Varėna"),
    sub("LT-56", "Vilkaviškis"),
    sub("LT-57", "Vilniaus miestas"),
    sub("LT-58", "Vilnius"),
    sub("LT-59", "Visaginas"),
    sub("LT-60", "Zarasai"),
    sub("LT-AL", "Alytaus apskritis"),
    sub("LT-KL", "Klaipėdos apskritis"),
    sub("LT-KU", "Kauno apskritis"),
    sub("LT-MR", "Marijampolės apskritis"),
    sub("LT-PN", "Panevėžio apskritis"),
    sub("LT-SA", "Šiaulių apskritis"),
    sub("LT-TA", "Tauragės apskritis"),
    sub("LT-TE", "Telšių apskritis"),
    sub("LT-UT", "Utenos apskritis"),
    sub("LT-VL", "Vilniaus apskritis"),
    // Luxembourg
    sub("LU-CA", "Capellen"),
    sub("LU-CL", "Clerf"),
    sub("LU-DI", "Diekirch"),
    sub("LU-EC", "Echternach"),
    sub("LU-ES", "Esch an der Alzette"),
    sub("LU-GR", "Grevenmacher"),
    sub("LU-LU", "Luxembourg"),
    sub("LU-ME", "Mersch"),
    sub("LU-RD", "Redange"),
    sub("LU-RM", "Remich"),
    sub("LU-VD", "Veianen"),
    sub("LU-WI", "Wiltz"),
    // Latvia
    sub("LV-001", "Aglonas novads"),
    sub("LV-002", "Aizkraukles novads"),
    sub("LV-003", "Aizputes novads"),
    sub("LV-004", "Aknīstes novads"),
    sub("LV-005", "Alojas novads"),
    sub("LV-006", "Alsungas novads"),
    sub("LV-007", "Alūksnes novads"),
    sub("LV-008", "Amatas novads"),
    sub("LV-009", "Apes novads"),
    sub("LV-010", "Auces novads"),
    sub("LV-011", "Ādažu novads"),
    sub("LV-012", "Babītes novads"),
    sub("LV-013", "Baldones novads"),
    sub("LV-014", "Baltinavas novads"),
    sub("LV-015", "Balvu novads"),
    sub("LV-016", "Bauskas novads"),
    sub("LV-017", "Beverīnas novads"),
    sub("LV-018", "Brocēnu novads"),
    sub("LV-019", "Burtnieku novads"),
    sub("LV-020", "Carnikavas novads"),
    sub("LV-021", "Cesvaines novads"),
    sub("LV-022", "Cēsu novads"),
    sub("LV-023", "Ciblas novads"),
    sub("LV-024", "Dagdas novads"),
    sub("LV-025", "Daugavpils novads"),
    sub("LV-026", "Dobeles novads"),
    sub("LV-027", "Dundagas novads"),
    sub("LV-028", "Durbes novads"),
    sub("LV-029", "Engures novads"),
    sub("LV-030", "Ērgļu novads"),
    sub("LV-031", "Garkalnes novads"),
    sub("LV-032", "Grobiņas novads"),
    sub("LV-033", "Gulbenes novads"),
    sub("LV-034", "Iecavas novads"),
    sub("LV-035", "Ikšķiles novads"),
    sub("LV-036", "Ilūkstes novads"),
    sub("LV-037", "Inčukalna novads"),
    sub("LV-038", "Jaunjelgavas novads"),
    sub("LV-039", "Jaunpiebalgas novads"),
    sub("LV-040", "Jaunpils novads"),
    sub("LV-041", "Jelgavas novads"),
    sub("LV-042", "Jēkabpils novads"),
    sub("LV-043", "Kandavas novads"),
    sub("LV-044", "Kārsavas novads"),
    sub("LV-045", "Kocēnu novads"),
    sub("LV-046", "Kokneses novads"),
    sub("LV-047", "Krāslavas novads"),
    sub("LV-048", "Krimuldas novads"),
    sub("LV-049", "Krustpils novads"),
    sub("LV-050", "Kuldīgas novads"),
    sub("LV-051", "Ķeguma novads"),
    sub("LV-052", "Ķekavas novads"),
    sub("LV-053", "Lielvārdes novads"),
    sub("LV-054", "Limbažu novads"),
    sub("LV-055", "Līgatnes novads"),
    sub("LV-056", "Līvānu novads"),
    sub("LV-057", "Lubānas novads"),
    sub("LV-058", "Ludzas novads"),
    sub("LV-059", "Madonas novads"),
    sub("LV-060", "Mazsalacas novads"),
    sub("LV-061", "Mālpils novads"),
    sub("LV-062", "Mārupes novads"),
    sub("LV-063", "Mērsraga novads"),
    sub("LV-064", "Naukšēnu novads"),
    sub("LV-065", "Neretas novads"),
    sub("LV-066", "Nīcas novads"),
    sub("LV-067", "Ogres novads"),
    sub("LV-068", "Olaines novads"),
    sub("LV-069", "Ozolnieku novads"),
    sub("LV-070", "Pārgaujas novads"),
    sub("LV-071", "Pāvilostas novads"),
    sub("LV-072", "Pļaviņu novads"),
    sub("LV-073", "Preiļu novads"),
    sub("LV-074", "Priekules novads"),
    sub("LV-075", "Priekuļu novads"),
    sub("LV-076", "Raunas novads"),
    sub("LV-077", "Rēzeknes novads"),
    sub("LV-078", "Riebiņu novads"),
    sub("LV-079", "Rojas novads"),
    sub("LV-080", "Ropažu novads"),
    sub("LV-081", "Rucavas novads"),
    sub("LV-082", "Rugāju novads"),
    sub("LV-083", "Rundāles novads"),
    sub("LV-084", "Rūjienas novads"),
    sub("LV-085", "Salas novads"),
    sub("LV-086", "Salacgrīvas novads"),
    sub("LV-087", "Salaspils novads"),
    sub("LV-088", "Saldus novads"),
    sub("LV-089", "Saulkrastu novads"),
    sub("LV-090", "Sējas novads"),
    sub("LV-091", "Siguldas novads"),
    sub("LV-092", "Skrīveru novads"),
    sub("LV-093", "Skrundas novads"),
    sub("LV-094", "Smiltenes novads"),
    sub("LV-095", "Stopiņu novads"),
    sub("LV-096", "Strenču novads"),
    sub("LV-097", "Talsu novads"),
    sub("LV-098", "Tērvetes novads"),
    sub("LV-099", "Tukuma novads"),
    sub("LV-100", "Vaiņodes novads"),
    sub("LV-101", "Valkas novads"),
    sub("LV-102", "Varakļānu novads"),
    sub("LV-103", "Vārkavas novads"),
    sub("LV-104", "Vecpiebalgas novads"),
    sub("LV-105", "Vecumnieku novads"),
    sub("LV-106", "Ventspils novads"),
    sub("LV-107", "Viesītes novads"),
    sub("LV-108", "Viļakas novads"),
    sub("LV-109", "Viļānu novads"),
    sub("LV-110", "Zilupes novads"),
    sub("LV-DGV", "Daugavpils"),
    sub("LV-JEL", "Jelgava"),
    sub("LV-JKB", "Jēkabpils"),
    sub("LV-JUR", "Jūrmala"),
    sub("LV-LPX", "Liepāja"),
    sub("LV-REZ", "Rēzekne"),
    sub("LV-RIX", "Rīga"),
    sub("LV-VEN", "Ventspils"),
    sub("LV-VMR", "Valmiera"),
    // Libya
    sub("LY-BA", "Banghāzī"),
    sub("LY-BU", "Al Buţnān"),
    sub("LY-DR", "Darnah"),
    sub("LY-GT", "Ghāt"),
    sub("LY-JA", "Al Jabal al Akhḑar"),
    sub("LY-JG", "Al Jabal al Gharbī"),
    sub("LY-JI", "Al Jafārah"),
    sub("LY-JU", "Al Jufrah"),
    sub("LY-KF", "Al Kufrah"),
    sub("LY-MB", "Al Marqab"),
    sub("LY-MI", "Mişrātah"),
    sub("LY-MJ", "Al Marj"),
    sub("LY-MQ", "Murzuq"),
    sub("LY-NL", "Nālūt"),
    sub("LY-NQ", "An Nuqāţ al Khams"),
    sub("LY-SB", "Sabhā"),
    sub("LY-SR", "Surt"),
    sub("LY-TB", "Ţarābulus"),
    sub("LY-WA", "Al Wāḩāt"),
    sub("LY-WD", "Wādī al Ḩayāt"),
    sub("LY-WS", "Wādī ash Shāţi’"),
    sub("LY-ZA", "Az Zāwiyah"),
    // Morocco
    sub("MA-01", "Tanger-Tétouan-Al Hoceïma"),
    sub("MA-02", "L'Oriental"),
    sub("MA-03", "Fès-Meknès"),
    sub("MA-04", "Rabat-Salé-Kénitra"),
    sub("MA-05", "Béni Mellal-Khénifra"),
    sub("MA-06", "Casablanca-Settat"),
    sub("MA-07", "Marrakech-Safi"),
    sub("MA-08", "Drâa-Tafilalet"),
    sub("MA-09", "Souss-Massa"),
    sub("MA-10", "Guelmim-Oued Noun (EH-partial)"),
    sub("MA-11", "Laâyoune-Sakia El Hamra (EH-partial)"),
    sub("MA-12", "Dakhla-Oued Ed-Dahab (EH)"),
    sub("MA-AGD", "Agadir-Ida-Ou-Tanane"),
    sub("MA-AOU", "Aousserd (EH)"),
    sub("MA-ASZ", "Assa-Zag (EH-partial)"),
    sub("MA-AZI", "Azilal"),
    sub("MA-BEM", "Béni Mellal"),
    sub("MA-BER", "Berkane"),
    sub("MA-BES", "Benslimane"),
    sub("MA-BOD", "Boujdour (EH)"),
    sub("MA-BOM", "Boulemane"),
    sub("MA-BRR", "Berrechid"),
    sub("MA-CAS", "Casablanca"),
    sub("MA-CHE", "Chefchaouen"),
    sub("MA-CHI", "Chichaoua"),
    sub("MA-CHT", "Chtouka-Ait Baha"),
    sub("MA-DRI", "Driouch"),
    sub("MA-ERR", "Errachidia"),
    sub("MA-ESI", "Essaouira"),
    sub("MA-ESM", "Es-Semara (EH-partial)"),
    sub("MA-FAH", "Fahs-Anjra"),
    sub("MA-FES", "Fès"),
    sub("MA-FIG", "Figuig"),
    sub("MA-FQH", "Fquih Ben Salah"),
    sub("MA-GUE", "Guelmim"),
    sub("MA-GUF", "Guercif"),
    sub("MA-HAJ", "El Hajeb"),
    sub("MA-HAO", "Al Haouz"),
    sub("MA-HOC", "Al Hoceïma"),
    sub("MA-IFR", "Ifrane"),
    sub("MA-INE", "Inezgane-Ait Melloul"),
    sub("MA-JDI", "El Jadida"),
    sub("MA-JRA", "Jerada"),
    sub("MA-KEN", "Kénitra"),
    sub("MA-KES", "El Kelâa des Sraghna"),
    sub("MA-KHE", "Khémisset"),
    sub("MA-KHN", "Khénifra"),
    sub("MA-KHO", "Khouribga"),
    sub("MA-LAA", "Laâyoune (EH)"),
    sub("MA-LAR", "Larache"),
    sub("MA-MAR", "Marrakech"),
    sub("MA-MDF", "M’diq-Fnideq"),
    sub("MA-MED", "Médiouna"),
    sub("MA-MEK", "Meknès"),
    sub("MA-MID", "Midelt"),
    sub("MA-MOH", "Mohammadia"),
    sub("MA-MOU", "Moulay Yacoub"),
    sub("MA-NAD", "Nador"),
    sub("MA-NOU", "Nouaceur"),
    sub("MA-OUA", "Ouarzazate"),
    sub("MA-OUD", "Oued Ed-Dahab (EH)"),
    sub("MA-OUJ", "Oujda-Angad"),
    sub("MA-OUZ", "Ouezzane"),
    sub("MA-RAB", "Rabat"),
    sub("MA-REH", "Rehamna"),
    sub("MA-SAF", "Safi"),
    sub("MA-SAL", "Salé"),
    sub("MA-SEF", "Sefrou"),
    sub("MA-SET", "Settat"),
    sub("MA-SIB", "Sidi Bennour"),
    sub("MA-SIF", "Sidi Ifni"),
    sub("MA-SIK", "Sidi Kacem"),
    sub("MA-SIL", "Sidi Slimane"),
    sub("MA-SKH", "Skhirate-Témara"),
    sub("MA-TAF", "Tarfaya (EH-partial)"),
    sub("MA-TAI", "Taourirt"),
    sub("MA-TAO", "Taounate"),
    sub("MA-TAR", "Taroudannt"),
    sub("MA-TAT", "Tata"),
    sub("MA-TAZ", "Taza"),
    sub("MA-TET", "Tétouan"),
    sub("MA-TIN", "Tinghir"),
    sub("MA-TIZ", "Tiznit"),
    sub("MA-TNG", "Tanger-Assilah"),
    sub("MA-TNT", "Tan-Tan (EH-partial)"),
    sub("MA-YUS", "Youssoufia"),
    sub("MA-ZAG", "Zagora"),
    // Monaco
    sub("MC-CL", "La Colle"),
    sub("MC-CO", "La Condamine"),
    sub("MC-FO", "Fontvieille"),
    sub("MC-GA", "La Gare"),
    sub("MC-JE", "Jardin Exotique"),
    sub("MC-LA", "Larvotto"),
    sub("MC-MA", "Malbousquet"),
    sub("MC-MC", "Monte-Carlo"),
    sub("MC-MG", "Moneghetti"),
    sub("MC-MO", "Monaco-Ville"),
    sub("MC-MU", "Moulins"),
    sub("MC-PH", "Port-Hercule"),
    sub("MC-SD", "Sainte-Dévote"),
    sub("MC-SO", "La Source"),
    sub("MC-SP", "Spélugues"),
    sub("MC-SR", "Saint-Roman"),
    sub("MC-VR", "Vallon de la Rousse"),
    // Moldova, Republic of
    sub("MD-AN", "Anenii Noi"),
    sub("MD-BA", "Bălți"),
    sub("MD-BD", "Bender [Tighina]"),
    sub("MD-BR", "Briceni"),
    sub("MD-BS", "Basarabeasca"),
    sub("MD-CA", "Cahul"),
    sub("MD-CL", "Călărași"),
    sub("MD-CM", "Cimișlia"),
    sub("MD-CR", "Criuleni"),
    sub("MD-CS", "Căușeni"),
    sub("MD-CT", "Cantemir"),
    sub("MD-CU", "Chișinău"),
    sub("MD-DO", "Dondușeni"),
    sub("MD-DR", "Drochia"),
    sub("MD-DU", "Dubăsari"),
    sub("MD-ED", "Edineț"),
    sub("MD-FA", "Fălești"),
    sub("MD-FL", "Florești"),
    sub("MD-GA", "Găgăuzia, Unitatea teritorială autonomă (UTAG)"),
    sub("MD-GL", "Glodeni"),
    sub("MD-HI", "Hîncești"),
    sub("MD-IA", "Ialoveni"),
    sub("MD-LE", "Leova"),
    sub("MD-NI", "Nisporeni"),
    sub("MD-OC", "Ocnița"),
    sub("MD-OR", "Orhei"),
    sub("MD-RE", "Rezina"),
    sub("MD-RI", "Rîșcani"),
    sub("MD-SD", "Șoldănești"),
    sub("MD-SI", "Sîngerei"),
    sub("MD-SN", "Stînga Nistrului, unitatea teritorială din"),
    sub("MD-SO", "Soroca"),
    sub("MD-ST", "Strășeni"),
    sub("MD-SV", "Ștefan Vodă"),
    sub("MD-TA", "Taraclia"),
    sub("MD-TE", "Telenești"),
    sub("MD-UN", "Ungheni"),
    // Montenegro
    sub("ME-01", "Andrijevica"),
    sub("ME-02", "Bar"),
    sub("ME-03", "Berane"),
    sub("ME-04", "Bijelo Polje"),
    sub("ME-05", "Budva"),
    sub("ME-06", "Cetinje"),
    sub("ME-07", "Danilovgrad"),
    sub("ME-08", "Herceg-Novi"),
    sub("ME-09", "Kolašin"),
    sub("ME-10", "Kotor"),
    sub("ME-11", "Mojkovac"),
    sub("ME-12", "Nikšić"),
    sub("ME-13", "Plav"),
    sub("ME-14", "Pljevlja"),
    sub("ME-15", "Plužine"),
    sub("ME-16", "Podgorica"),
    sub("ME-17", "Rožaje"),
    sub("ME-18", "Šavnik"),
    sub("ME-19", "Tivat"),
    sub("ME-20", "Ulcinj"),
    sub("ME-21", "Žabljak"),
    sub("ME-22", "Gusinje"),
    sub("ME-23", "Petnjica"),
    sub("ME-24", "Tuzi"),
    // Madagascar
    sub("MG-A", "Toamasina"),
    sub("MG-D", "Antsiranana"),
    sub("MG-F", "Fianarantsoa"),
    sub("MG-M", "Mahajanga"),
    sub("MG-T", "Antananarivo"),
    sub("MG-U", "Toliara"),
    // Marshall Islands
    sub("MH-ALK", "Ailuk"),
    sub("MH-ALL", "Ailinglaplap"),
    sub("MH-ARN", "Arno"),
    sub("MH-AUR", "Aur"),
    sub("MH-EBO", "Ebon"),
    sub("MH-ENI", "Enewetak & Ujelang"),
    sub("MH-JAB", "Jabat"),
    sub("MH-JAL", "Jaluit"),
    sub("MH-KIL", "Bikini & Kili"),
    sub("MH-KWA", "Kwajalein"),
    sub("MH-L", "Ralik chain"),
    sub("MH-LAE", "Lae"),
    sub("MH-LIB", "Lib"),
    sub("MH-LIK", "Likiep"),
    sub("MH-MAJ", "Majuro"),
    sub("MH-MAL", "Maloelap"),
    sub("MH-MEJ", "Mejit"),
    sub("MH-MIL", "Mili"),
    sub("MH-NMK", "Namdrik"),
    sub("MH-NMU", "Namu"),
    sub("MH-RON", "Rongelap"),
    sub("MH-T", "Ratak chain"),
    sub("MH-UJA", "Ujae"),
    sub("MH-UTI", "Utrik"),
    sub("MH-WTH", "Wotho"),
    sub("MH-WTJ", "Wotje"),
    // North Macedonia
    sub("MK-101", "Veles"),
    sub("MK-102", "Gradsko"),
    sub("MK-103", "Demir Kapija"),
    sub("MK-104", "Kavadarci"),
    sub("MK-105", "Lozovo"),
    sub("MK-106", "Negotino"),
    sub("MK-107", "Rosoman"),
    sub("MK-108", "Sveti Nikole"),
    sub("MK-109", "Čaška"),
    sub("MK-201", "Berovo"),
    sub("MK-202", "Vinica"),
    sub("MK-203", "Delčevo"),
    sub("MK-204", "Zrnovci"),
    sub("MK-205", "Karbinci"),
    sub("MK-206", "Kočani"),
    sub("MK-207", "Makedonska Kamenica"),
    sub("MK-208", "Pehčevo"),
    sub("MK-209", "Probištip"),
    sub("MK-210", "Češinovo-Obleševo"),
    sub("MK-211", "Štip"),
    sub("MK-301", "Vevčani"),
    sub("MK-303", "Debar"),
    sub("MK-304", "Debrca"),
    sub("MK-307", "Kičevo"),
    sub("MK-308", "Makedonski Brod"),
    sub("MK-310", "Ohrid"),
    sub("MK-311", "Plasnica"),
    sub("MK-312", "Struga"),
    sub("MK-313", "Centar Župa"),
    sub("MK-401", "Bogdanci"),
    sub("MK-402", "Bosilovo"),
    sub("MK-403", "Valandovo"),
    sub("MK-404", "Vasilevo"),
    sub("MK-405", "Gevgelija"),
    sub("MK-406", "Dojran"),
    sub("MK-407", "Konče"),
    sub("MK-408", "Novo Selo"),
    sub("MK-409", "Radoviš"),
    sub("MK-410", "Strumica"),
    sub("MK-501", "Bitola"),
    sub("MK-502", "Demir Hisar"),
    sub("MK-503", "Dolneni"),
    sub("MK-504", "Krivogaštani"),
    sub("MK-505", "Kruševo"),
    sub("MK-506", "Mogila"),
    sub("MK-507", "Novaci"),
    sub("MK-508", "Prilep"),
    sub("MK-509", "Resen"),
    sub("MK-601", "Bogovinje"),
    sub("MK-602", "Brvenica"),
    sub("MK-603", "Vrapčište"),
    sub("MK-604", "Gostivar"),
    sub("MK-605", "Želino"),
    sub("MK-606", "Jegunovce"),
    sub("MK-607", "Mavrovo i Rostuše"),
    sub("MK-608", "Tearce"),
    sub("MK-609", "Tetovo"),
    sub("MK-701", "Kratovo"),
    sub("MK-702", "Kriva Palanka"),
    sub("MK-703", "Kumanovo"),
    sub("MK-704", "Lipkovo"),
    sub("MK-705", "Rankovce"),
    sub("MK-706", "Staro Nagoričane"),
    sub("MK-801", "Aerodrom †"),
    sub("MK-802", "Aračinovo"),
    sub("MK-803", "Butel †"),
    sub("MK-804", "Gazi Baba †"),
    sub("MK-805", "Gjorče Petrov †"),
    sub("MK-806", "Zelenikovo"),
    sub("MK-807", "Ilinden"),
    sub("MK-808", "Karpoš †"),
    sub("MK-809", "Kisela Voda †"),
    sub("MK-810", "Petrovec"),
    sub("MK-811", "Saraj †"),
    sub("MK-812", "Sopište"),
    sub("MK-813", "Studeničani"),
    sub("MK-814", "Centar †"),
    sub("MK-815", "Čair †"),
    sub("MK-816", "Čučer-Sandevo"),
    sub("MK-817", "Šuto Orizari †"),
    // Mali
    sub("ML-1", "Kayes"),
    sub("ML-10", "Taoudénit"),
    sub("ML-2", "Koulikoro"),
    sub("ML-3", "Sikasso"),
    sub("ML-4", "Ségou"),
    sub("ML-5", "Mopti"),
    sub("ML-6", "Tombouctou"),
    sub("ML-7", "Gao"),
    sub("ML-8", "Kidal"),
    sub("ML-9", "Ménaka"),
    sub("ML-BKO", "Bamako"),
    // Myanmar
    sub("MM-01", "Sagaing"),
    sub("MM-02", "Bago"),
    sub("MM-03", "Magway"),
    sub("MM-04", "Mandalay"),
    sub("MM-05", "Tanintharyi"),
    sub("MM-06", "Yangon"),
    sub("MM-07", "Ayeyarwady"),
    sub("MM-11", "Kachin"),
    sub("MM-12", "Kayah"),
    sub("MM-13", "Kayin"),
    sub("MM-14", "Chin"),
    sub("MM-15", "Mon"),
    sub("MM-16", "Rakhine"),
    sub("MM-17", "Shan"),
    sub("MM-18", "Nay Pyi Taw"),
    // Mongolia
    sub("MN-035", "Orhon"),
    sub("MN-037", "Darhan uul"),
    sub("MN-039", "Hentiy"),
    sub("MN-041", "Hövsgöl"),
    sub("MN-043", "Hovd"),
    sub("MN-046", "Uvs"),
    sub("MN-047", "Töv"),
    sub("MN-049", "Selenge"),
    sub("MN-051", "Sühbaatar"),
    sub("MN-053", "Ömnögovĭ"),
    sub("MN-055", "Övörhangay"),
    sub("MN-057", "Dzavhan"),
    sub("MN-059", "Dundgovĭ"),
    sub("MN-061", "Dornod"),
    sub("MN-063", "Dornogovĭ"),
    sub("MN-064", "Govĭ-Sümber"),
    sub("MN-065", "Govĭ-Altay"),
    sub("MN-067", "Bulgan"),
    sub("MN-069", "Bayanhongor"),
    sub("MN-071", "Bayan-Ölgiy"),
    sub("MN-073", "Arhangay"),
    sub("MN-1", "Ulaanbaatar"),
    // Mauritania
    sub("MR-01", "Hodh ech Chargui"),
    sub("MR-02", "Hodh el Gharbi"),
    sub("MR-03", "Assaba"),
    sub("MR-04", "Gorgol"),
    sub("MR-05", "Brakna"),
    sub("MR-06", "Trarza"),
    sub("MR-07", "Adrar"),
    sub("MR-08", "Dakhlet Nouâdhibou"),
    sub("MR-09", "Tagant"),
    sub("MR-10", "Guidimaka"),
    sub("MR-11", "Tiris Zemmour"),
    sub("MR-12", "Inchiri"),
    sub("MR-13", "Nouakchott Ouest"),
    sub("MR-14", "Nouakchott Nord"),
    sub("MR-15", "Nouakchott Sud"),
    // Malta
    sub("MT-01", "Attard"),
    sub("MT-02", "Balzan"),
    sub("MT-03", "Birgu"),
    sub("MT-04", "Birkirkara"),
    sub("MT-05", "Birżebbuġa"),
    sub("MT-06", "Bormla"),
    sub("MT-07", "Dingli"),
    sub("MT-08", "Fgura"),
    sub("MT-09", "Floriana"),
    sub("MT-10", "Fontana"),
    sub("MT-11", "Gudja"),
    sub("MT-12", "Gżira"),
    sub("MT-13", "Għajnsielem"),
    sub("MT-14", "Għarb"),
    sub("MT-15", "Għargħur"),
    sub("MT-16", "Għasri"),
    sub("MT-17", "Għaxaq"),
    sub("MT-18", "Ħamrun"),
    sub("MT-19", "Iklin"),
    sub("MT-20", "Isla"),
    sub("MT-21", "Kalkara"),
    sub("MT-22", "Kerċem"),
    sub("MT-23", "Kirkop"),
    sub("MT-24", "Lija"),
    sub("MT-25", "Luqa"),
    sub("MT-26", "Marsa"),
    sub("MT-27", "Marsaskala"),
    sub("MT-28", "Marsaxlokk"),
    sub("MT-29", "Mdina"),
    sub("MT-30", "Mellieħa"),
    sub("MT-31", "Mġarr"),
    sub("MT-32", "Mosta"),
    sub("MT-33", "Mqabba"),
    sub("MT-34", "Msida"),
    sub("MT-35", "Mtarfa"),
    sub("MT-36", "Munxar"),
    sub("MT-37", "Nadur"),
    sub("MT-38", "Naxxar"),
    sub("MT-39", "Paola"),
    sub("MT-40", "Pembroke"),
    sub("MT-41", "Pietà"),
    sub("MT-42", "Qala"),
    sub("MT-43", "Qormi"),
    sub("MT-44", "Qrendi"),
    sub("MT-45", "Rabat Gozo"),
    sub("MT-46", "Rabat Malta"),
    sub("MT-47", "Safi"),
    sub("MT-48", "Saint Julian's"),
    sub("MT-49", "Saint John"),
    sub("MT-50", "Saint Lawrence"),
    sub("MT-51", "Saint Paul's Bay"),
    sub("MT-52", "Sannat"),
    sub("MT-53", "Saint Lucia's"),
    sub("MT-54", "Santa Venera"),
    sub("MT-55", "Siġġiewi"),
    sub("MT-56", "Sliema"),
    sub("MT-57", "Swieqi"),
    sub("MT-58", "Ta' Xbiex"),
    sub("MT-59", "Tarxien"),
    sub("MT-60", "Valletta"),
    sub("MT-61", "Xagħra"),
    sub("MT-62", "Xewkija"),
    sub("MT-63", "Xgħajra"),
    sub("MT-64", "Żabbar"),
    sub("MT-65", "Żebbuġ Gozo"),
    sub("MT-66", "Żebbuġ Malta"),
    sub("MT-67", "Żejtun"),
    sub("MT-68", "Żurrieq"),
    // Mauritius
    sub("MU-AG", "Agalega Islands"),
    sub("MU-BL", "Black River"),
    sub("MU-CC", "Cargados Carajos Shoals"),
    sub("MU-FL", "Flacq"),
    sub("MU-GP", "Grand Port"),
    sub("MU-MO", "Moka"),
    sub("MU-PA", "Pamplemousses"),
    sub("MU-PL", "Port Louis"),
    sub("MU-PW", "Plaines Wilhems"),
    sub("MU-RO", "Rodrigues Island"),
    sub("MU-RR", "Rivière du Rempart"),
    sub("MU-SA", "Savanne"),
    // Maldives
    sub("MV-00", "South Ari Atoll"),
    sub("MV-01", "Addu City"),
    sub("MV-02", "North Ari Atoll"),
    sub("MV-03", "Faadhippolhu"),
    sub("MV-04", "Felidhu Atoll"),
    sub("MV-05", "Hahdhunmathi"),
    sub("MV-07", "North Thiladhunmathi"),
    sub("MV-08", "Kolhumadulu"),
    sub("MV-12", "Mulaku Atoll"),
    sub("MV-13", "North Maalhosmadulu"),
    sub("MV-14", "North Nilandhe Atoll"),
    sub("MV-17", "South Nilandhe Atoll"),
    sub("MV-20", "South Maalhosmadulu"),
    sub("MV-23", "South Thiladhunmathi"),
    sub("MV-24", "North Miladhunmadulu"),
    sub("MV-25", "South Miladhunmadulu"),
    sub("MV-26", "Male Atoll"),
    sub("MV-27", "North Huvadhu Atoll"),
    sub("MV-28", "South Huvadhu Atoll"),
    sub("MV-29", "Fuvammulah"),
    sub("MV-MLE", "Male"),
    // Malawi
    sub("MW-BA", "Balaka"),
    sub("MW-BL", "Blantyre"),
    sub("MW-C", "Central Region"),
    sub("MW-CK", "Chikwawa"),
    sub("MW-CR", "Chiradzulu"),
    sub("MW-CT", "Chitipa"),
    sub("MW-DE", "Dedza"),
    sub("MW-DO", "Dowa"),
    sub("MW-KR", "Karonga"),
    sub("MW-KS", "Kasungu"),
    sub("MW-LI", "Lilongwe"),
    sub("MW-LK", "Likoma"),
    sub("MW-MC", "Mchinji"),
    sub("MW-MG", "Mangochi"),
    sub("MW-MH", "Machinga"),
    sub("MW-MU", "Mulanje"),
    sub("MW-MW", "Mwanza"),
    sub("MW-MZ", "Mzimba"),
    sub("MW-N", "Northern Region"),
    sub("MW-NB", "Nkhata Bay"),
    sub("MW-NE", "Neno"),
    sub("MW-NI", "Ntchisi"),
    sub("MW-NK", "Nkhotakota"),
    sub("MW-NS", "Nsanje"),
    sub("MW-NU", "Ntcheu"),
    sub("MW-PH", "Phalombe"),
    sub("MW-RU", "Rumphi"),
    sub("MW-S", "Southern Region"),
    sub("MW-SA", "Salima"),
    sub("MW-TH", "Thyolo"),
    sub("MW-ZO", "Zomba"),
    // Mexico
    sub("MX-AGU", "Aguascalientes"),
    sub("MX-BCN", "Baja California"),
    sub("MX-BCS", "Baja California Sur"),
    sub("MX-CAM", "Campeche"),
    sub("MX-CHH", "Chihuahua"),
    sub("MX-CHP", "Chiapas"),
    sub("MX-CMX", "Ciudad de México"),
    sub("MX-COA", "Coahuila de Zaragoza"),
    sub("MX-COL", "Colima"),
    sub("MX-DUR", "Durango"),
    sub("MX-GRO", "Guerrero"),
    sub("MX-GUA", "Guanajuato"),
    sub("MX-HID", "Hidalgo"),
    sub("MX-JAL", "Jalisco"),
    sub("MX-MEX", "México"),
    sub("MX-MIC", "Michoacán de Ocampo"),
    sub("MX-MOR", "Morelos"),
    sub("MX-NAY", "Nayarit"),
    sub("MX-NLE", "Nuevo León"),
    sub("MX-OAX", "Oaxaca"),
    sub("MX-PUE", "Puebla"),
    sub("MX-QUE", "Querétaro"),
    sub("MX-ROO", "Quintana Roo"),
    sub("MX-SIN", "Sinaloa"),
    sub("MX-SLP", "San Luis Potosí"),
    sub("MX-SON", "Sonora"),
    sub("MX-TAB", "Tabasco"),
    sub("MX-TAM", "Tamaulipas"),
    sub("MX-TLA", "Tlaxcala"),
    sub("MX-VER", "Veracruz de Ignacio de la Llave"),
    sub("MX-YUC", "Yucatán"),
    sub("MX-ZAC", "Zacatecas"),
    // Malaysia
    sub("MY-01", "Johor"),
    sub("MY-02", "Kedah"),
    sub("MY-03", "Kelantan"),
    sub("MY-04", "Melaka"),
    sub("MY-05", "Negeri Sembilan"),
    sub("MY-06", "Pahang"),
    sub("MY-07", "Pulau Pinang"),
    sub("MY-08", "Perak"),
    sub("MY-09", "Perlis"),
    sub("MY-10", "Selangor"),
    sub("MY-11", "Terengganu"),
    sub("MY-12", "Sabah"),
    sub("MY-13", "Sarawak"),
    sub("MY-14", "Wilayah Persekutuan Kuala Lumpur"),
    sub("MY-15", "Wilayah Persekutuan Labuan"),
    sub("MY-16", "Wilayah Persekutuan Putrajaya"),
    // Mozambique
    sub("MZ-A", "Niassa"),
    sub("MZ-B", "Manica"),
    sub("MZ-G", "Gaza"),
    sub("MZ-I", "Inhambane"),
    sub("MZ-L", "Maputo"),
    sub("MZ-MPM", "Maputo"),
    sub("MZ-N", "Nampula"),
    sub("MZ-P", "Cabo Delgado"),
    sub("MZ-Q", "Zambézia"),
    sub("MZ-S", "Sofala"),
    sub("MZ-T", "Tete"),
    // Namibia
    sub("NA-CA", "Zambezi"),
    sub("NA-ER", "Erongo"),
    sub("NA-HA", "Hardap"),
    sub("NA-KA", "//Karas"),
    sub("NA-KE", "Kavango East"),
    sub("NA-KH", "Khomas"),
    sub("NA-KU", "Kunene"),
    sub("NA-KW", "Kavango West"),
    sub("NA-OD", "Otjozondjupa"),
    sub("NA-OH", "Omaheke"),
    sub("NA-ON", "Oshana"),
    sub("NA-OS", "Omusati"),
    sub("NA-OT", "Oshikoto"),
    sub("NA-OW", "Ohangwena"),
    // Niger
    sub("NE-1", "Agadez"),
    sub("NE-2", "Diffa"),
    sub("NE-3", "Dosso"),
    sub("NE-4", "Maradi"),
    sub("NE-5", "Tahoua"),
    sub("NE-6", "Tillabéri"),
    sub("NE-7", "Zinder"),
    sub("NE-8", "Niamey"),
    // Nigeria
    sub("NG-AB", "Abia"),
    sub("NG-AD", "Adamawa"),
    sub("NG-AK", "Akwa Ibom"),
    sub("NG-AN", "Anambra"),
    sub("NG-BA", "Bauchi"),
    sub("NG-BE", "Benue"),
    sub("NG-BO", "Borno"),
    sub("NG-BY", "Bayelsa"),
    sub("NG-CR", "Cross River"),
    sub("NG-DE", "Delta"),
    sub("NG-EB", "Ebonyi"),
    sub("NG-ED", "Edo"),
    sub("NG-EK", "Ekiti"),
    sub("NG-EN", "Enugu"),
    sub("NG-FC", "Abuja Federal Capital Territory"),
    sub("NG-GO", "Gombe"),
    sub("NG-IM", "Imo"),
    sub("NG-JI", "Jigawa"),
    sub("NG-KD", "Kaduna"),
    sub("NG-KE", "Kebbi"),
    sub("NG-KN", "Kano"),
    sub("NG-KO", "Kogi"),
    sub("NG-KT", "Katsina"),
    sub("NG-KW", "Kwara"),
    sub("NG-LA", "Lagos"),
    sub("NG-NA", "Nasarawa"),
    sub("NG-NI", "Niger"),
    sub("NG-OG", "Ogun"),
    sub("NG-ON", "Ondo"),
    sub("NG-OS", "Osun"),
    sub("NG-OY", "Oyo"),
    sub("NG-PL", "Plateau"),
    sub("NG-RI", "Rivers"),
    sub("NG-SO", "Sokoto"),
    sub("NG-TA", "Taraba"),
    sub("NG-YO", "Yobe"),
    sub("NG-ZA", "Zamfara"),
    // Nicaragua
    sub("NI-AN", "Costa Caribe Norte"),
    sub("NI-AS", "Costa Caribe Sur"),
    sub("NI-BO", "Boaco"),
    sub("NI-CA", "Carazo"),
    sub("NI-CI", "Chinandega"),
    sub("NI-CO", "Chontales"),
    sub("NI-ES", "Estelí"),
    sub("NI-GR", "Granada"),
    sub("NI-JI", "Jinotega"),
    sub("NI-LE", "León"),
    sub("NI-MD", "Madriz"),
    sub("NI-MN", "Managua"),
    sub("NI-MS", "Masaya"),
    sub("NI-MT", "Matagalpa"),
    sub("NI-NS", "Nueva Segovia"),
    sub("NI-RI", "Rivas"),
    sub("NI-SJ", "Río San Juan"),
    // Netherlands
    sub("NL-AW", "Aruba"),
    sub("NL-BQ1", "Bonaire"),
    sub("NL-BQ2", "Saba"),
    sub("NL-BQ3", "Sint Eustatius"),
    sub("NL-CW", "Curaçao"),
    sub("NL-DR", "Drenthe"),
    sub("NL-FL", "Flevoland"),
    sub("NL-FR", "Fryslân"),
    sub("NL-GE", "Gelderland"),
    sub("NL-GR", "Groningen"),
    sub("NL-LI", "Limburg"),
    sub("NL-NB", "Noord-Brabant"),
    sub("NL-NH", "Noord-Holland"),
    sub("NL-OV", "Overijssel"),
    sub("NL-SX", "Sint Maarten"),
    sub("NL-UT", "Utrecht"),
    sub("NL-ZE", "Zeeland"),
    sub("NL-ZH", "Zuid-Holland"),
    // Norway
    sub("NO-03", "Oslo"),
    sub("NO-11", "Rogaland"),
    sub("NO-15", "Møre og Romsdal"),
    sub("NO-18", "Nordland"),
    sub("NO-21", "Svalbard (Arctic Region)"),
    sub("NO-22", "Jan Mayen (Arctic Region)"),
    sub("NO-30", "Viken"),
    sub("NO-34", "Innlandet"),
    sub("NO-38", "Vestfold og Telemark"),
    sub("NO-42", "Agder"),
    sub("NO-46", "Vestland"),
    sub("NO-50", "Trööndelage"),
    sub("NO-54", "Romssa ja Finnmárkku"),
    // Nepal
    sub("NP-1", "Central"),
    sub("NP-2", "Mid Western"),
    sub("NP-3", "Western"),
    sub("NP-4", "Eastern"),
    sub("NP-5", "Far Western"),
    sub("NP-BA", "Bagmati"),
    sub("NP-BH", "Bheri"),
    sub("NP-DH", "Dhawalagiri"),
    sub("NP-GA", "Gandaki"),
    sub("NP-JA", "Janakpur"),
    sub("NP-KA", "Karnali"),
    sub("NP-KO", "Kosi"),
    sub("NP-LU", "Lumbini"),
    sub("NP-MA", "Mahakali"),
    sub("NP-ME", "Mechi"),
    sub("NP-NA", "Narayani"),
    sub("NP-P1", "Province 1"),
    sub("NP-P2", "Province 2"),
    sub("NP-P3", "Bāgmatī"),
    sub("NP-P4", "Gandaki"),
    sub("NP-P5", "Province 5"),
    sub("NP-P6", "Karnali"),
    sub("NP-P7", "Sudūr Pashchim"),
    sub("NP-RA", "Rapti"),
    sub("NP-SA", "Sagarmatha"),
    sub("NP-SE", "Seti"),
    // Nauru
    sub("NR-01", "Aiwo"),
    sub("NR-02", "Anabar"),
    sub("NR-03", "Anetan"),
    sub("NR-04", "Anibare"),
    sub("NR-05", "Baitsi"),
    sub("NR-06", "Boe"),
    sub("NR-07", "Buada"),
    sub("NR-08", "Denigomodu"),
    sub("NR-09", "Ewa"),
    sub("NR-10", "Ijuw"),
    sub("NR-11", "Meneng"),
    sub("NR-12", "Nibok"),
    sub("NR-13", "Uaboe"),
    sub("NR-14", "Yaren"),
    // New Zealand
    sub("NZ-AUK", "Auckland"),
    sub("NZ-BOP", "Bay of Plenty"),
    sub("NZ-CAN", "Canterbury"),
    sub("NZ-CIT", "Chatham Islands Territory"),
    sub("NZ-GIS", "Gisborne"),
    sub("NZ-HKB", "Hawke's Bay"),
    sub("NZ-MBH", "Marlborough"),
    sub("NZ-MWT", "Manawatu-Wanganui"),
    sub("NZ-NSN", "Nelson"),
    sub("NZ-NTL", "Northland"),
    sub("NZ-OTA", "Otago"),
    sub("NZ-STL", "Southland"),
    sub("NZ-TAS", "Tasman"),
    sub("NZ-TKI", "Taranaki"),
    sub("NZ-WGN", "Wellington"),
    sub("NZ-WKO", "Waikato"),
    sub("NZ-WTC", "West Coast"),
    // Oman
    sub("OM-BJ", "Janūb al Bāţinah"),
    sub("OM-BS", "Shamāl al Bāţinah"),
    sub("OM-BU", "Al Buraymī"),
    sub("OM-DA", "Ad Dākhilīyah"),
    sub("OM-MA", "Masqaţ"),
    sub("OM-MU", "Musandam"),
    sub("OM-SJ", "Janūb ash Sharqīyah"),
    sub("OM-SS", "Shamāl ash Sharqīyah"),
    sub("OM-WU", "Al Wusţá"),
    sub("OM-ZA", "Az̧ Z̧āhirah"),
    sub("OM-ZU", "Z̧ufār"),
    // Panama
    sub("PA-1", "Bocas del Toro"),
    sub("PA-10", "Panamá Oeste"),
    sub("PA-2", "Coclé"),
    sub("PA-3", "Colón"),
    sub("PA-4", "Chiriquí"),
    sub("PA-5", "Darién"),
    sub("PA-6", "Herrera"),
    sub("PA-7", "Los Santos"),
    sub("PA-8", "Panamá"),
    sub("PA-9", "Veraguas"),
    sub("PA-EM", "Emberá"),
    sub("PA-KY", "Guna Yala"),
    sub("PA-NB", "Ngöbe-Buglé"),
    // Peru
    sub("PE-AMA", "Amarumayu"),
    sub("PE-ANC", "Ancash"),
    sub("PE-APU", "Apurimaq"),
    sub("PE-ARE", "Arequipa"),
    sub("PE-AYA", "Ayacucho"),
    sub("PE-CAJ", "Cajamarca"),
    sub("PE-CAL", "El Callao"),
    sub("PE-CUS", "Cusco"),
    sub("PE-HUC", "Huánuco"),
    sub("PE-HUV", "Huancavelica"),
    sub("PE-ICA", "Ica"),
    sub("PE-JUN", "Hunin"),
    sub("PE-LAL", "La Libertad"),
    sub("PE-LAM", "Lambayeque"),
    sub("PE-LIM", "Lima"),
    sub("PE-LMA", "Lima hatun llaqta"),
    sub("PE-LOR", "Loreto"),
    sub("PE-MDD", "Madre de Dios"),
    sub("PE-MOQ", "Moquegua"),
    sub("PE-PAS", "Pasco"),
    sub("PE-PIU", "Piura"),
    sub("PE-PUN", "Puno"),
    sub("PE-SAM", "San Martin"),
    sub("PE-TAC", "Tacna"),
    sub("PE-TUM", "Tumbes"),
    sub("PE-UCA", "Ucayali"),
    // Papua New Guinea
    sub("PG-CPK", "Chimbu"),
    sub("PG-CPM", "Central"),
    sub("PG-EBR", "East New Britain"),
    sub("PG-EHG", "Eastern Highlands"),
    sub("PG-EPW", "Enga"),
    sub("PG-ESW", "East Sepik"),
    sub("PG-GPK", "Gulf"),
    sub("PG-HLA", "Hela"),
    sub("PG-JWK", "Jiwaka"),
    sub("PG-MBA", "Milne Bay"),
    sub("PG-MPL", "Morobe"),
    sub("PG-MPM", "Madang"),
    sub("PG-MRL", "Manus"),
    sub("PG-NCD", "National Capital District (Port Moresby)"),
    sub("PG-NIK", "New Ireland"),
    sub("PG-NPP", "Northern"),
    sub("PG-NSB", "Bougainville"),
    sub("PG-SAN", "West Sepik"),
    sub("PG-SHM", "Southern Highlands"),
    sub("PG-WBK", "West New Britain"),
    sub("PG-WHM", "Western Highlands"),
    sub("PG-WPD", "Western"),
    // Philippines
    sub("PH-00", "National Capital Region"),
    sub("PH-01", "Ilocos (Region I)"),
    sub("PH-02", "Cagayan Valley (Region II)"),
    sub("PH-03", "Central Luzon (Region III)"),
    sub("PH-05", "Bicol (Region V)"),
    sub("PH-06", "Western Visayas (Region VI)"),
    sub("PH-07", "Central Visayas (Region VII)"),
    sub("PH-08", "Eastern Visayas (Region VIII)"),
    sub("PH-09", "Zamboanga Peninsula (Region IX)"),
    sub("PH-10", "Northern Mindanao (Region X)"),
    sub("PH-11", "Davao (Region XI)"),
    sub("PH-12", "Soccsksargen (Region XII)"),
    sub("PH-13", "Caraga (Region XIII)"),
    sub("PH-14", "Autonomous Region in Muslim Mindanao (ARMM)"),
    sub("PH-15", "Cordillera Administrative Region (CAR)"),
    sub("PH-40", "Calabarzon (Region IV-A)"),
    sub("PH-41", "Mimaropa (Region IV-B)"),
    sub("PH-ABR", "Abra"),
    sub("PH-AGN", "Agusan del Norte"),
    sub("PH-AGS", "Agusan del Sur"),
    sub("PH-AKL", "Aklan"),
    sub("PH-ALB", "Albay"),
    sub("PH-ANT", "Antique"),
    sub("PH-APA", "Apayao"),
    sub("PH-AUR", "Aurora"),
    sub("PH-BAN", "Bataan"),
    sub("PH-BAS", "Basilan"),
    sub("PH-BEN", "Benguet"),
    sub("PH-BIL", "Biliran"),
    sub("PH-BOH", "Bohol"),
    sub("PH-BTG", "Batangas"),
    sub("PH-BTN", "Batanes"),
    sub("PH-BUK", "Bukidnon"),
    sub("PH-BUL", "Bulacan"),
    sub("PH-CAG", "Cagayan"),
    sub("PH-CAM", "Camiguin"),
    sub("PH-CAN", "Camarines Norte"),
    sub("PH-CAP", "Capiz"),
    sub("PH-CAS", "Camarines Sur"),
    sub("PH-CAT", "Catanduanes"),
    sub("PH-CAV", "Cavite"),
    sub("PH-CEB", "Cebu"),
    sub("PH-COM", "Davao de Oro"),
    sub("PH-DAO", "Davao Oriental"),
    sub("PH-DAS", "Davao del Sur"),
    sub("PH-DAV", "Davao del Norte"),
    sub("PH-DIN", "Dinagat Islands"),
    sub("PH-DVO", "Davao Occidental"),
    sub("PH-EAS", "Eastern Samar"),
    sub("PH-GUI", "Guimaras"),
    sub("PH-IFU", "Ifugao"),
    sub("PH-ILI", "Iloilo"),
    sub("PH-ILN", "Ilocos Norte"),
    sub("PH-ILS", "Ilocos Sur"),
    sub("PH-ISA", "Isabela"),
    sub("PH-KAL", "Kalinga"),
    sub("PH-LAG", "Laguna"),
    sub("PH-LAN", "Lanao del Norte"),
    sub("PH-LAS", "Lanao del Sur"),
    sub("PH-LEY", "Leyte"),
    sub("PH-LUN", "La Union"),
    sub("PH-MAD", "Marinduque"),
    sub("PH-MAG", "Maguindanao"),
    sub("PH-MAS", "Masbate"),
    sub("PH-MDC", "Mindoro Occidental"),
    sub("PH-MDR", "Mindoro Oriental"),
    sub("PH-MOU", "Mountain Province"),
    sub("PH-MSC", "Misamis Occidental"),
    sub("PH-MSR", "Misamis Oriental"),
    sub("PH-NCO", "Cotabato"),
    sub("PH-NEC", "Negros Occidental"),
    sub("PH-NER", "Negros Oriental"),
    sub("PH-NSA", "Northern Samar"),
    sub("PH-NUE", "Nueva Ecija"),
    sub("PH-NUV", "Nueva Vizcaya"),
    sub("PH-PAM", "Pampanga"),
    sub("PH-PAN", "Pangasinan"),
    sub("PH-PLW", "Palawan"),
    sub("PH-QUE", "Quezon"),
    sub("PH-QUI", "Quirino"),
    sub("PH-RIZ", "Rizal"),
    sub("PH-ROM", "Romblon"),
    sub("PH-SAR", "Sarangani"),
    sub("PH-SCO", "South Cotabato"),
    sub("PH-SIG", "Siquijor"),
    sub("PH-SLE", "Southern Leyte"),
    sub("PH-SLU", "Sulu"),
    sub("PH-SOR", "Sorsogon"),
    sub("PH-SUK", "Sultan Kudarat"),
    sub("PH-SUN", "Surigao del Norte"),
    sub("PH-SUR", "Surigao del Sur"),
    sub("PH-TAR", "Tarlac"),
    sub("PH-TAW", "Tawi-Tawi"),
    sub("PH-WSA", "Samar"),
    sub("PH-ZAN", "Zamboanga del Norte"),
    sub("PH-ZAS", "Zamboanga del Sur"),
    sub("PH-ZMB", "Zambales"),
    sub("PH-ZSI", "Zamboanga Sibugay"),
    // Pakistan
    sub("PK-BA", "Balochistan"),
    sub("PK-GB", "Gilgit-Baltistan"),
    sub("PK-IS", "Islamabad"),
    sub("PK-JK", "Azad Jammu and Kashmir"),
    sub("PK-KP", "Khyber Pakhtunkhwa"),
    sub("PK-PB", "Punjab"),
    sub("PK-SD", "Sindh"),
    // Poland
    sub("PL-02", "Dolnośląskie"),
    sub("PL-04", "Kujawsko-pomorskie"),
    sub("PL-06", "Lubelskie"),
    sub("PL-08", "Lubuskie"),
    sub("PL-10", "Łódzkie"),
    sub("PL-12", "Małopolskie"),
    sub("PL-14", "Mazowieckie"),
    sub("PL-16", "Opolskie"),
    sub("PL-18", "Podkarpackie"),
    sub("PL-20", "Podlaskie"),
    sub("PL-22", "Pomorskie"),
    sub("PL-24", "Śląskie"),
    sub("PL-26", "Świętokrzyskie"),
    sub("PL-28", "Warmińsko-mazurskie"),
    sub("PL-30", "Wielkopolskie"),
    sub("PL-32", "Zachodniopomorskie"),
    // Palestine, State of
    sub("PS-BTH", "Bethlehem"),
    sub("PS-DEB", "Deir El Balah"),
    sub("PS-GZA", "Gaza"),
    sub("PS-HBN", "Hebron"),
    sub("PS-JEM", "Jerusalem"),
    sub("PS-JEN", "Jenin"),
    sub("PS-JRH", "Jericho and Al Aghwar"),
    sub("PS-KYS", "Khan Yunis"),
    sub("PS-NBS", "Nablus"),
    sub("PS-NGZ", "North Gaza"),
    sub("PS-QQA", "Qalqilya"),
    sub("PS-RBH", "Ramallah"),
    sub("PS-RFH", "Rafah"),
    sub("PS-SLT", "Salfit"),
    sub("PS-TBS", "Tubas"),
    sub("PS-TKM", "Tulkarm"),
    // Portugal
    sub("PT-01", "Aveiro"),
    sub("PT-02", "Beja"),
    sub("PT-03", "Braga"),
    sub("PT-04", "Bragança"),
    sub("PT-05", "Castelo Branco"),
    sub("PT-06", "Coimbra"),
    sub("PT-07", "Évora"),
    sub("PT-08", "Faro"),
    sub("PT-09", "Guarda"),
    sub("PT-10", "Leiria"),
    sub("PT-11", "Lisboa"),
    sub("PT-12", "Portalegre"),
    sub("PT-13", "Porto"),
    sub("PT-14", "Santarém"),
    sub("PT-15", "Setúbal"),
    sub("PT-16", "Viana do Castelo"),
    sub("PT-17", "Vila Real"),
    sub("PT-18", "Viseu"),
    sub("PT-20", "Região Autónoma dos Açores"),
    sub("PT-30", "Região Autónoma da Madeira"),
    // Palau
    sub("PW-002", "Aimeliik"),
    sub("PW-004", "Airai"),
    sub("PW-010", "Angaur"),
    sub("PW-050", "Hatohobei"),
    sub("PW-100", "Kayangel"),
    sub("PW-150", "Koror"),
    sub("PW-212", "Melekeok"),
    sub("PW-214", "Ngaraard"),
    sub("PW-218", "Ngarchelong"),
    sub("PW-222", "Ngardmau"),
    sub("PW-224", "Ngatpang"),
    sub("PW-226", "Ngchesar"),
    sub("PW-227", "Ngeremlengui"),
    sub("PW-228", "Ngiwal"),
    sub("PW-350", "Peleliu"),
    sub("PW-370", "Sonsorol"),
    // Paraguay
    sub("PY-1", "Concepción"),
    sub("PY-10", "Alto Paraná"),
    sub("PY-11", "Central"),
    sub("PY-12", "Ñeembucú"),
    sub("PY-13", "Amambay"),
    sub("PY-14", "Canindeyú"),
    sub("PY-15", "Presidente Hayes"),
    sub("PY-16", "Alto Paraguay"),
    sub("PY-19", "Boquerón"),
    sub("PY-2", "San Pedro"),
    sub("PY-3", "Cordillera"),
    sub("PY-4", "Guairá"),
    sub("PY-5", "Caaguazú"),
    sub("PY-6", "Caazapá"),
    sub("PY-7", "Itapúa"),
    sub("PY-8", "Misiones"),
    sub("PY-9", "Paraguarí"),
    sub("PY-ASU", "Asunción"),
    // Qatar
    sub("QA-DA", "Ad Dawḩah"),
    sub("QA-KH", "Al Khawr wa adh Dhakhīrah"),
    sub("QA-MS", "Ash Shamāl"),
    sub("QA-RA", "Ar Rayyān"),
    sub("QA-SH", "Ash Shīḩānīyah"),
    sub("QA-US", "Umm Şalāl"),
    sub("QA-WA", "Al Wakrah"),
    sub("QA-ZA", "Az̧ Z̧a‘āyin"),
    // Romania
    sub("RO-AB", "Alba"),
    sub("RO-AG", "Argeș"),
    sub("RO-AR", "Arad"),
    sub("RO-B", "București"),
    sub("RO-BC", "Bacău"),
    sub("RO-BH", "Bihor"),
    sub("RO-BN", "Bistrița-Năsăud"),
    sub("RO-BR", "Brăila"),
    sub("RO-BT", "Botoșani"),
    sub("RO-BV", "Brașov"),
    sub("RO-BZ", "Buzău"),
    sub("RO-CJ", "Cluj"),
    sub("RO-CL", "Călărași"),
    sub("RO-CS", "Caraș-Severin"),
    sub("RO-CT", "Constanța"),
    sub("RO-CV", "Covasna"),
    sub("RO-DB", "Dâmbovița"),
    sub("RO-DJ", "Dolj"),
    sub("RO-GJ", "Gorj"),
    sub("RO-GL", "Galați"),
    sub("RO-GR", "Giurgiu"),
    sub("RO-HD", "Hunedoara"),
    sub("RO-HR", "Harghita"),
    sub("RO-IF", "Ilfov"),
    sub("RO-IL", "Ialomița"),
    sub("RO-IS", "Iași"),
    sub("RO-MH", "Mehedinți"),
    sub("RO-MM", "Maramureș"),
    sub("RO-MS", "Mureș"),
    sub("RO-NT", "Neamț"),
    sub("RO-OT", "Olt"),
    sub("RO-PH", "Prahova"),
    sub("RO-SB", "Sibiu"),
    sub("RO-SJ", "Sălaj"),
    sub("RO-SM", "Satu Mare"),
    sub("RO-SV", "Suceava"),
    sub("RO-TL", "Tulcea"),
    sub("RO-TM", "Timiș"),
    sub("RO-TR", "Teleorman"),
    sub("RO-VL", "Vâlcea"),
    sub("RO-VN", "Vrancea"),
    sub("RO-VS", "Vaslui"),
    // Serbia
    sub("RS-00", "Beograd"),
    sub("RS-01", "Severnobački okrug"),
    sub("RS-02", "Srednjebanatski okrug"),
    sub("RS-03", "Severnobanatski okrug"),
    sub("RS-04", "Južnobanatski okrug"),
    sub("RS-05", "Zapadnobački okrug"),
    sub("RS-06", "Južnobački okrug"),
    sub("RS-07", "Sremski okrug"),
    sub("RS-08", "Mačvanski okrug"),
    sub("RS-09", "Kolubarski okrug"),
    sub("RS-10", "Podunavski okrug"),
    sub("RS-11", "Braničevski okrug"),
    sub("RS-12", "Šumadijski okrug"),
    sub("RS-13", "Pomoravski okrug"),
    sub("RS-14", "Borski okrug"),
    sub("RS-15", "Zaječarski okrug"),
    sub("RS-16", "Zlatiborski okrug"),
    sub("RS-17", "Moravički okrug"),
    sub("RS-18", "Raški okrug"),
    sub("RS-19", "Rasinski okrug"),
    sub("RS-20", "Nišavski okrug"),
    sub("RS-21", "Toplički okrug"),
    sub("RS-22", "Pirotski okrug"),
    sub("RS-23", "Jablanički okrug"),
    sub("RS-24", "Pčinjski okrug"),
    sub("RS-25", "Kosovski okrug"),
    sub("RS-26", "Pećki okrug"),
    sub("RS-27", "Prizrenski okrug"),
    sub("RS-28", "Kosovsko-Mitrovački okrug"),
    sub("RS-29", "Kosovsko-Pomoravski okrug"),
    sub("RS-KM", "Kosovo-Metohija"),
    sub("RS-VO", "Vojvodina"),
    // Russian Federation
    sub("RU-AD", "Adygeja, Respublika"),
    sub("RU-AL", "Altaj, Respublika"),
    sub("RU-ALT", "Altajskij kraj"),
    sub("RU-AMU", "Amurskaja oblast'"),
    sub("RU-ARK", "Arhangel'skaja oblast'"),
    sub("RU-AST", "Astrahanskaja oblast'"),
    sub("RU-BA", "Bashkortostan, Respublika"),
    sub("RU-BEL", "Belgorodskaja oblast'"),
    sub("RU-BRY", "Brjanskaja oblast'"),
    sub("RU-BU", "Burjatija, Respublika"),
    sub("RU-CE", "Chechenskaya Respublika"),
    sub("RU-CHE", "Chelyabinskaya oblast'"),
    sub("RU-CHU", "Chukotskiy avtonomnyy okrug"),
    sub("RU-CU", "Chuvashskaya Respublika"),
    sub("RU-DA", "Dagestan, Respublika"),
    sub("RU-IN", "Ingushetiya, Respublika"),
    sub("RU-IRK", "Irkutskaja oblast'"),
    sub("RU-IVA", "Ivanovskaja oblast'"),
    sub("RU-KAM", "Kamchatskiy kray"),
    sub("RU-KB", "Kabardino-Balkarskaja Respublika"),
    sub("RU-KC", "Karachayevo-Cherkesskaya Respublika"),
    sub("RU-KDA", "Krasnodarskij kraj"),
    sub("RU-KEM", "Kemerovskaja oblast'"),
    sub("RU-KGD", "Kaliningradskaja oblast'"),
    sub("RU-KGN", "Kurganskaja oblast'"),
    sub("RU-KHA", "Habarovskij kraj"),
    sub("RU-KHM", "Hanty-Mansijskij avtonomnyj okrug"),
    sub("RU-KIR", "Kirovskaja oblast'"),
    sub("RU-KK", "Hakasija, Respublika"),
    sub("RU-KL", "Kalmykija, Respublika"),
    sub("RU-KLU", "Kaluzhskaya oblast'"),
    sub("RU-KO", "Komi, Respublika"),
    sub("RU-KOS", "Kostromskaja oblast'"),
    sub("RU-KR", "Karelija, Respublika"),
    sub("RU-KRS", "Kurskaja oblast'"),
    sub("RU-KYA", "Krasnojarskij kraj"),
    sub("RU-LEN", "Leningradskaja oblast'"),
    sub("RU-LIP", "Lipeckaja oblast'"),
    sub("RU-MAG", "Magadanskaja oblast'"),
    sub("RU-ME", "Marij Èl, Respublika"),
    sub("RU-MO", "Mordovija, Respublika"),
    sub("RU-MOS", "Moskovskaja oblast'"),
    sub("RU-MOW", "Moskva"),
    sub("RU-MUR", "Murmanskaja oblast'"),
    sub("RU-NEN", "Neneckij avtonomnyj okrug"),
    sub("RU-NGR", "Novgorodskaja oblast'"),
    sub("RU-NIZ", "Nizhegorodskaya oblast'"),
    sub("RU-NVS", "Novosibirskaja oblast'"),
    sub("RU-OMS", "Omskaja oblast'"),
    sub("RU-ORE", "Orenburgskaja oblast'"),
    sub("RU-ORL", "Orlovskaja oblast'"),
    sub("RU-PER", "Permskij kraj"),
    sub("RU-PNZ", "Penzenskaja oblast'"),
    sub("RU-PRI", "Primorskij kraj"),
    sub("RU-PSK", "Pskovskaja oblast'"),
    sub("RU-ROS", "Rostovskaja oblast'"),
    sub("RU-RYA", "Rjazanskaja oblast'"),
    sub("RU-SA", "Saha, Respublika"),
    sub("RU-SAK", "Sahalinskaja oblast'"),
    sub("RU-SAM", "Samarskaja oblast'"),
    sub("RU-SAR", "Saratovskaja oblast'"),
    sub("RU-SE", "Severnaja Osetija, Respublika"),
    sub("RU-SMO", "Smolenskaja oblast'"),
    sub("RU-SPE", "Sankt-Peterburg"),
    sub("RU-STA", "Stavropol'skij kraj"),
    sub("RU-SVE", "Sverdlovskaja oblast'"),
    sub("RU-TA", "Tatarstan, Respublika"),
    sub("RU-TAM", "Tambovskaja oblast'"),
    sub("RU-TOM", "Tomskaja oblast'"),
    sub("RU-TUL", "Tul'skaja oblast'"),
    sub("RU-TVE", "Tverskaja oblast'"),
    sub("RU-TY", "Tyva, Respublika"),
    sub("RU-TYU", "Tjumenskaja oblast'"),
    sub("RU-UD", "Udmurtskaja Respublika"),
    sub("RU-ULY", "Ul'janovskaja oblast'"),
    sub("RU-VGG", "Volgogradskaja oblast'"),
    sub("RU-VLA", "Vladimirskaja oblast'"),
    sub("RU-VLG", "Vologodskaja oblast'"),
    sub("RU-VOR", "Voronezhskaya oblast'"),
    sub("RU-YAN", "Jamalo-Neneckij avtonomnyj okrug"),
    sub("RU-YAR", "Jaroslavskaja oblast'"),
    sub("RU-YEV", "Evrejskaja avtonomnaja oblast'"),
    sub("RU-ZAB", "Zabajkal'skij kraj"),
    // Rwanda
    sub("RW-01", "City of Kigali"),
    sub("RW-02", "Eastern"),
    sub("RW-03", "Northern"),
    sub("RW-04", "Western"),
    sub("RW-05", "Southern"),
    // Saudi Arabia
    sub("SA-01", "Ar Riyāḑ"),
    sub("SA-02", "Makkah al Mukarramah"),
    sub("SA-03", "Al Madīnah al Munawwarah"),
    sub("SA-04", "Ash Sharqīyah"),
    sub("SA-05", "Al Qaşīm"),
    sub("SA-06", "Ḩā'il"),
    sub("SA-07", "Tabūk"),
    sub("SA-08", "Al Ḩudūd ash Shamālīyah"),
    sub("SA-09", "Jāzān"),
    sub("SA-10", "Najrān"),
    sub("SA-11", "Al Bāḩah"),
    sub("SA-12", "Al Jawf"),
    sub("SA-14", "'Asīr"),
    // Solomon Islands
    sub("SB-CE", "Central"),
    sub("SB-CH", "Choiseul"),
    sub("SB-CT", "Capital Territory (Honiara)"),
    sub("SB-GU", "Guadalcanal"),
    sub("SB-IS", "Isabel"),
    sub("SB-MK", "Makira-Ulawa"),
    sub("SB-ML", "Malaita"),
    sub("SB-RB", "Rennell and Bellona"),
    sub("SB-TE", "Temotu"),
    sub("SB-WE", "Western"),
    // Seychelles
    sub("SC-01", "Anse aux Pins"),
    sub("SC-02", "Anse Boileau"),
    sub("SC-03", "Anse Etoile"),
    sub("SC-04", "Au Cap"),
    sub("SC-05", "Anse Royale"),
    sub("SC-06", "Baie Lazare"),
    sub("SC-07", "Baie Sainte Anne"),
    sub("SC-08", "Beau Vallon"),
    sub("SC-09", "Bel Air"),
    sub("SC-10", "Bel Ombre"),
    sub("SC-11", "Cascade"),
    sub("SC-12", "Glacis"),
    sub("SC-13", "Grand Anse Mahe"),
    sub("SC-14", "Grand Anse Praslin"),
    sub("SC-15", "La Digue"),
    sub("SC-16", "English River"),
    sub("SC-17", "Mont Buxton"),
    sub("SC-18", "Mont Fleuri"),
    sub("SC-19", "Plaisance"),
    sub("SC-20", "Pointe Larue"),
    sub("SC-21", "Port Glaud"),
    sub("SC-22", "Saint Louis"),
    sub("SC-23", "Takamaka"),
    sub("SC-24", "Les Mamelles"),
    sub("SC-25", "Roche Caiman"),
    sub("SC-26", "Ile Perseverance I"),
    sub("SC-27", "Ile Perseverance II"),
    // Sudan
    sub("SD-DC", "Central Darfur"),
    sub("SD-DE", "East Darfur"),
    sub("SD-DN", "North Darfur"),
    sub("SD-DS", "South Darfur"),
    sub("SD-DW", "West Darfur"),
    sub("SD-GD", "Gedaref"),
    sub("SD-GK", "West Kordofan"),
    sub("SD-GZ", "Gezira"),
    sub("SD-KA", "Kassala"),
    sub("SD-KH", "Khartoum"),
    sub("SD-KN", "North Kordofan"),
    sub("SD-KS", "South Kordofan"),
    sub("SD-NB", "Blue Nile"),
    sub("SD-NO", "Northern"),
    sub("SD-NR", "River Nile"),
    sub("SD-NW", "White Nile"),
    sub("SD-RS", "Red Sea"),
    sub("SD-SI", "Sennar"),
    // Sweden
    sub("SE-AB", "Stockholms län [SE-01]"),
    sub("SE-AC", "Västerbottens län [SE-24]"),
    sub("SE-BD", "Norrbottens län [SE-25]"),
    sub("SE-C", "Uppsala län [SE-03]"),
    sub("SE-D", "Södermanlands län [SE-04]"),
    sub("SE-E", "Östergötlands län [SE-05]"),
    sub("SE-F", "Jönköpings län [SE-06]"),
    sub("SE-G", "Kronobergs län [SE-07]"),
    sub("SE-H", "Kalmar län [SE-08]"),
    sub("SE-I", "Gotlands län [SE-09]"),
    sub("SE-K", "Blekinge län [SE-10]"),
    sub("SE-M", "Skåne län [SE-12]"),
    sub("SE-N", "Hallands län [SE-13]"),
    sub("SE-O", "Västra Götalands län [SE-14]"),
    sub("SE-S", "Värmlands län [SE-17]"),
    sub("SE-T", "Örebro län [SE-18]"),
    sub("SE-U", "Västmanlands län [SE-19]"),
    sub("SE-W", "Dalarnas län [SE-20]"),
    sub("SE-X", "Gävleborgs län [SE-21]"),
    sub("SE-Y", "Västernorrlands län [SE-22]"),
    sub("SE-Z", "Jämtlands län [SE-23]"),
    // Singapore
    sub("SG-01", "Central Singapore"),
    sub("SG-02", "North East"),
    sub("SG-03", "North West"),
    sub("SG-04", "South East"),
    sub("SG-05", "South West"),
    // Saint Helena, Ascension and Tristan da Cunha
    sub("SH-AC", "Ascension"),
    sub("SH-HL", "Saint Helena"),
    sub("SH-TA", "Tristan da Cunha"),
    // Slovenia
    sub("SI-001", "Ajdovščina"),
    sub("SI-002", "Beltinci"),
    sub("SI-003", "Bled"),
    sub("SI-004", "Bohinj"),
    sub("SI-005", "Borovnica"),
    sub("SI-006", "Bovec"),
    sub("SI-007", "Brda"),
    sub("SI-008", "Brezovica"),
    sub("SI-009", "Brežice"),
    sub("SI-010", "Tišina"),
    sub("SI-011", "Celje"),
    sub("SI-012", "Cerklje na Gorenjskem"),
    sub("SI-013", "Cerknica"),
    sub("SI-014", "Cerkno"),
    sub("SI-015", "Črenšovci"),
    sub("SI-016", "Črna na Koroškem"),
    sub("SI-017", "Črnomelj"),
    sub("SI-018", "Destrnik"),
    sub("SI-019", "Divača"),
    sub("SI-020", "Dobrepolje"),
    sub("SI-021", "Dobrova-Polhov Gradec"),
    sub("SI-022", "Dol pri Ljubljani"),
    sub("SI-023", "Domžale"),
    sub("SI-024", "Dornava"),
    sub("SI-025", "Dravograd"),
    sub("SI-026", "Duplek"),
    sub("SI-027", "Gorenja vas-Poljane"),
    sub("SI-028", "Gorišnica"),
    sub("SI-029", "Gornja Radgona"),
    sub("SI-030", "Gornji Grad"),
    sub("SI-031", "Gornji Petrovci"),
    sub("SI-032", "Grosuplje"),
    sub("SI-033", "Šalovci"),
    sub("SI-034", "Hrastnik"),
    sub("SI-035", "Hrpelje-Kozina"),
    sub("SI-036", "Idrija"),
    sub("SI-037", "Ig"),
    sub("SI-038", "Ilirska Bistrica"),
    sub("SI-039", "Ivančna Gorica"),
    sub("SI-040", "Izola"),
    sub("SI-041", "Jesenice"),
    sub("SI-042", "Juršinci"),
    sub("SI-043", "Kamnik"),
    sub("SI-044", "Kanal"),
    sub("SI-045", "Kidričevo"),
    sub("SI-046", "Kobarid"),
    sub("SI-047", "Kobilje"),
    sub("SI-048", "Kočevje"),
    sub("SI-049", "Komen"),
    sub("SI-050", "Koper"),
    sub("SI-051", "Kozje"),
    sub("SI-052", "Kranj"),
    sub("SI-053", "Kranjska Gora"),
    sub("SI-054", "Krško"),
    sub("SI-055", "Kungota"),
    sub("SI-056", "Kuzma"),
    sub("SI-057", "Laško"),
    sub("SI-058", "Lenart"),
    sub("SI-059", "Lendava"),
    sub("SI-060", "Litija"),
    sub("SI-061", "Ljubljana"),
    sub("SI-062", "Ljubno"),
    sub("SI-063", "Ljutomer"),
    sub("SI-064", "Logatec"),
    sub("SI-065", "Loška dolina"),
    sub("SI-066", "Loški Potok"),
    sub("SI-067", "Luče"),
    sub("SI-068", "Lukovica"),
    sub("SI-069", "Majšperk"),
    sub("SI-070", "Maribor"),
    sub("SI-071", "Medvode"),
    sub("SI-072", "Mengeš"),
    sub("SI-073", "Metlika"),
    sub("SI-074", "Mežica"),
    sub("SI-075", "Miren-Kostanjevica"),
    sub("SI-076", "Mislinja"),
    sub("SI-077", "Moravče"),
    sub("SI-078", "Moravske Toplice"),
    sub("SI-079", "Mozirje"),
    sub("SI-080", "Murska Sobota"),
    sub("SI-081", "Muta"),
    sub("SI-082", "Naklo"),
    sub("SI-083", "Nazarje"),
    sub("SI-084", "Nova Gorica"),
    sub("SI-085", "Novo Mesto"),
    sub("SI-086", "Odranci"),
    sub("SI-087", "Ormož"),
    sub("SI-088", "Osilnica"),
    sub("SI-089", "Pesnica"),
    sub("SI-090", "Piran"),
    sub("SI-091", "Pivka"),
    sub("SI-092", "Podčetrtek"),
    sub("SI-093", "Podvelka"),
    sub("SI-094", "Postojna"),
    sub("SI-095", "Preddvor"),
    sub("SI-096", "Ptuj"),
    sub("SI-097", "Puconci"),
    sub("SI-098", "Rače-Fram"),
    sub("SI-099", "Radeče"),
    sub("SI-100", "Radenci"),
    sub("SI-101", "Radlje ob Dravi"),
    sub("SI-102", "Radovljica"),
    sub("SI-103", "Ravne na Koroškem"),
    sub("SI-104", "Ribnica"),
    sub("SI-105", "Rogašovci"),
    sub("SI-106", "Rogaška Slatina"),
    sub("SI-107", "Rogatec"),
    sub("SI-108", "Ruše"),
    sub("SI-109", "Semič"),
    sub("SI-110", "Sevnica"),
    sub("SI-111", "Sežana"),
    sub("SI-112", "Slovenj Gradec"),
    sub("SI-113", "Slovenska Bistrica"),
    sub("SI-114", "Slovenske Konjice"),
    sub("SI-115", "Starše"),
    sub("SI-116", "Sveti Jurij ob Ščavnici"),
    sub("SI-117", "Šenčur"),
    sub("SI-118", "Šentilj"),
    sub("SI-119", "Šentjernej"),
    sub("SI-120", "Šentjur"),
    sub("SI-121", "Škocjan"),
    sub("SI-122", "Škofja Loka"),
    sub("SI-123", "Škofljica"),
    sub("SI-124", "Šmarje pri Jelšah"),
    sub("SI-125", "Šmartno ob Paki"),
    sub("SI-126", "Šoštanj"),
    sub("SI-127", "Štore"),
    sub("SI-128", "Tolmin"),
    sub("SI-129", "Trbovlje"),
    sub("SI-130", "Trebnje"),
    sub("SI-131", "Tržič"),
    sub("SI-132", "Turnišče"),
    sub("SI-133", "Velenje"),
    sub("SI-134", "Velike Lašče"),
    sub("SI-135", "Videm"),
    sub("SI-136", "Vipava"),
    sub("SI-137", "Vitanje"),
    sub("SI-138", "Vodice"),
    sub("SI-139", "Vojnik"),
    sub("SI-140", "Vrhnika"),
    sub("SI-141", "Vuzenica"),
    sub("SI-142", "Zagorje ob Savi"),
    sub("SI-143", "Zavrč"),
    sub("SI-144", "Zreče"),
    sub("SI-146", "Železniki"),
    sub("SI-147", "Žiri"),
    sub("SI-148", "Benedikt"),
    sub("SI-149", "Bistrica ob Sotli"),
    sub("SI-150", "Bloke"),
    sub("SI-151", "Braslovče"),
    sub("SI-152", "Cankova"),
    sub("SI-153", "Cerkvenjak"),
    sub("SI-154", "Dobje"),
    sub("SI-155", "Dobrna"),
    sub("SI-156", "Dobrovnik"),
    sub("SI-157", "Dolenjske Toplice"),
    sub("SI-158", "Grad"),
    sub("SI-159", "Hajdina"),
    sub("SI-160", "Hoče-Slivnica"),
    sub("SI-161", "Hodoš"),
    sub("SI-162", "Horjul"),
    sub("SI-163", "Jezersko"),
    sub("SI-164", "Komenda"),
    sub("SI-165", "Kostel"),
    sub("SI-166", "Križevci"),
    sub("SI-167", "Lovrenc na Pohorju"),
    sub("SI-168", "Markovci"),
    sub("SI-169", "Miklavž na Dravskem polju"),
    sub("SI-170", "Mirna Peč"),
    sub("SI-171", "Oplotnica"),
    sub("SI-172", "Podlehnik"),
    sub("SI-173", "Polzela"),
    sub("SI-174", "Prebold"),
    sub("SI-175", "Prevalje"),
    sub("SI-176", "Razkrižje"),
    sub("SI-177", "Ribnica na Pohorju"),
    sub("SI-178", "Selnica ob Dravi"),
    sub("SI-179", "Sodražica"),
    sub("SI-180", "Solčava"),
    sub("SI-181", "Sveta Ana"),
    sub("SI-182", "Sveti Andraž v Slovenskih goricah"),
    sub("SI-183", "Šempeter-Vrtojba"),
    sub("SI-184", "Tabor"),
    sub("SI-185", "Trnovska Vas"),
    sub("SI-186", "Trzin"),
    sub("SI-187", "Velika Polana"),
    sub("SI-188", "Veržej"),
    sub("SI-189", "Vransko"),
    sub("SI-190", "Žalec"),
    sub("SI-191", "Žetale"),
    sub("SI-192", "Žirovnica"),
    sub("SI-193", "Žužemberk"),
    sub("SI-194", "Šmartno pri Litiji"),
    sub("SI-195", "Apače"),
    sub("SI-196", "Cirkulane"),
    sub("SI-197", "Kosanjevica na Krki"),
    sub("SI-198", "Makole"),
    sub("SI-199", "Mokronog-Trebelno"),
    sub("SI-200", "Poljčane"),
    sub("SI-201", "Renče-Vogrsko"),
    sub("SI-202", "Središče ob Dravi"),
    sub("SI-203", "Straža"),
    sub("SI-204", "Sveta Trojica v Slovenskih goricah"),
    sub("SI-205", "Sveti Tomaž"),
    sub("SI-206", "Šmarješke Toplice"),
    sub("SI-207", "Gorje"),
    sub("SI-208", "Log-Dragomer"),
    sub("SI-209", "Rečica ob Savinji"),
    sub("SI-210", "Sveti Jurij v Slovenskih goricah"),
    sub("SI-211", "Šentrupert"),
    sub("SI-212", "Mirna"),
    sub("SI-213", "Ankaran"),
    // Slovakia
    sub("SK-BC", "Banskobystrický kraj"),
    sub("SK-BL", "Bratislavský kraj"),
    sub("SK-KI", "Košický kraj"),
    sub("SK-NI", "Nitriansky kraj"),
    sub("SK-PV", "Prešovský kraj"),
    sub("SK-TA", "Trnavský kraj"),
    sub("SK-TC", "Trenčiansky kraj"),
    sub("SK-ZI", "Žilinský kraj"),
    // Sierra Leone
    sub("SL-E", "Eastern"),
    sub("SL-N", "Northern"),
    sub("SL-NW", "North Western"),
    sub("SL-S", "Southern"),
    sub("SL-W", "Western Area (Freetown)"),
    // San Marino
    sub("SM-01", "Acquaviva"),
    sub("SM-02", "Chiesanuova"),
    sub("SM-03", "Domagnano"),
    sub("SM-04", "Faetano"),
    sub("SM-05", "Fiorentino"),
    sub("SM-06", "Borgo Maggiore"),
    sub("SM-07", "Città di San Marino"),
    sub("SM-08", "Montegiardino"),
    sub("SM-09", "Serravalle"),
    // Senegal
    sub("SN-DB", "Diourbel"),
    sub("SN-DK", "Dakar"),
    sub("SN-FK", "Fatick"),
    sub("SN-KA", "Kaffrine"),
    sub("SN-KD", "Kolda"),
    sub("SN-KE", "Kédougou"),
    sub("SN-KL", "Kaolack"),
    sub("SN-LG", "Louga"),
    sub("SN-MT", "Matam"),
    sub("SN-SE", "Sédhiou"),
    sub("SN-SL", "Saint-Louis"),
    sub("SN-TC", "Tambacounda"),
    sub("SN-TH", "Thiès"),
    sub("SN-ZG", "Ziguinchor"),
    // Somalia
    sub("SO-AW", "Awdal"),
    sub("SO-BK", "Bakool"),
    sub("SO-BN", "Banaadir"),
    sub("SO-BR", "Bari"),
    sub("SO-BY", "Bay"),
    sub("SO-GA", "Galguduud"),
    sub("SO-GE", "Gedo"),
    sub("SO-HI", "Hiiraan"),
    sub("SO-JD", "Jubbada Dhexe"),
    sub("SO-JH", "Jubbada Hoose"),
    sub("SO-MU", "Mudug"),
    sub("SO-NU", "Nugaal"),
    sub("SO-SA", "Sanaag"),
    sub("SO-SD", "Shabeellaha Dhexe"),
    sub("SO-SH", "Shabeellaha Hoose"),
    sub("SO-SO", "Sool"),
    sub("SO-TO", "Togdheer"),
    sub("SO-WO", "Woqooyi Galbeed"),
    // Suriname
    sub("SR-BR", "Brokopondo"),
    sub("SR-CM", "Commewijne"),
    sub("SR-CR", "Coronie"),
    sub("SR-MA", "Marowijne"),
    sub("SR-NI", "Nickerie"),
    sub("SR-PM", "Paramaribo"),
    sub("SR-PR", "Para"),
    sub("SR-SA", "Saramacca"),
    sub("SR-SI", "Sipaliwini"),
    sub("SR-WA", "Wanica"),
    // South Sudan
    sub("SS-BN", "Northern Bahr el Ghazal"),
    sub("SS-BW", "Western Bahr el Ghazal"),
    sub("SS-EC", "Central Equatoria"),
    sub("SS-EE", "Eastern Equatoria"),
    sub("SS-EW", "Western Equatoria"),
    sub("SS-JG", "Jonglei"),
    sub("SS-LK", "Lakes"),
    sub("SS-NU", "Upper Nile"),
    sub("SS-UY", "Unity"),
    sub("SS-WR", "Warrap"),
    // Sao Tome and Principe
    sub("ST-01", "Água Grande"),
    sub("ST-02", "Cantagalo"),
    sub("ST-03", "Caué"),
    sub("ST-04", "Lembá"),
    sub("ST-05", "Lobata"),
    sub("ST-06", "Mé-Zóchi"),
    sub("ST-P", "Príncipe"),
    // El Salvador
    sub("SV-AH", "Ahuachapán"),
    sub("SV-CA", "Cabañas"),
    sub("SV-CH", "Chalatenango"),
    sub("SV-CU", "Cuscatlán"),
    sub("SV-LI", "La Libertad"),
    sub("SV-MO", "Morazán"),
    sub("SV-PA", "La Paz"),
    sub("SV-SA", "Santa Ana"),
    sub("SV-SM", "San Miguel"),
    sub("SV-SO", "Sonsonate"),
    sub("SV-SS", "San Salvador"),
    sub("SV-SV", "San Vicente"),
    sub("SV-UN", "La Unión"),
    sub("SV-US", "Usulután"),
    // Syrian Arab Republic
    sub("SY-DI", "Dimashq"),
    sub("SY-DR", "Dar'ā"),
    sub("SY-DY", "Dayr az Zawr"),
    sub("SY-HA", "Al Ḩasakah"),
    sub("SY-HI", "Ḩimş"),
    sub("SY-HL", "Ḩalab"),
    sub("SY-HM", "Ḩamāh"),
    sub("SY-ID", "Idlib"),
    sub("SY-LA", "Al Lādhiqīyah"),
    sub("SY-QU", "Al Qunayţirah"),
    sub("SY-RA", "Ar Raqqah"),
    sub("SY-RD", "Rīf Dimashq"),
    sub("SY-SU", "As Suwaydā'"),
    sub("SY-TA", "Ţarţūs"),
    // Eswatini
    sub("SZ-HH", "Hhohho"),
    sub("SZ-LU", "Lubombo"),
    sub("SZ-MA", "Manzini"),
    sub("SZ-SH", "Shiselweni"),
    // Chad
    sub("TD-BA", "Al Baţḩā’"),
    sub("TD-BG", "Bahr el Ghazal"),
    sub("TD-BO", "Borkou"),
    sub("TD-CB", "Chari-Baguirmi"),
    sub("TD-EE", "Ennedi-Est"),
    sub("TD-EO", "Ennedi-Ouest"),
    sub("TD-GR", "Guéra"),
    sub("TD-HL", "Hadjer Lamis"),
    sub("TD-KA", "Kanem"),
    sub("TD-LC", "Al Buḩayrah"),
    sub("TD-LO", "Logone-Occidental"),
    sub("TD-LR", "Logone-Oriental"),
    sub("TD-MA", "Mandoul"),
    sub("TD-MC", "Moyen-Chari"),
    sub("TD-ME", "Mayo-Kebbi-Est"),
    sub("TD-MO", "Mayo-Kebbi-Ouest"),
    sub("TD-ND", "Madīnat Injamīnā"),
    sub("TD-OD", "Ouaddaï"),
    sub("TD-SA", "Salamat"),
    sub("TD-SI", "Sila"),
    sub("TD-TA", "Tandjilé"),
    sub("TD-TI", "Tibastī"),
    sub("TD-WF", "Wadi Fira"),
    // Togo
    sub("TG-C", "Centrale"),
    sub("TG-K", "Kara"),
    sub("TG-M", "Maritime (Région)"),
    sub("TG-P", "Plateaux"),
    sub("TG-S", "Savanes"),
    // Thailand
    sub("TH-10", "Krung Thep Maha Nakhon"),
    sub("TH-11", "Samut Prakan"),
    sub("TH-12", "Nonthaburi"),
    sub("TH-13", "Pathum Thani"),
    sub("TH-14", "Phra Nakhon Si Ayutthaya"),
    sub("TH-15", "Ang Thong"),
    sub("TH-16", "Lop Buri"),
    sub("TH-17", "Sing Buri"),
    sub("TH-18", "Chai Nat"),
    sub("TH-19", "Saraburi"),
    sub("TH-20", "Chon Buri"),
    sub("TH-21", "Rayong"),
    sub("TH-22", "Chanthaburi"),
    sub("TH-23", "Trat"),
    sub("TH-24", "Chachoengsao"),
    sub("TH-25", "Prachin Buri"),
    sub("TH-26", "Nakhon Nayok"),
    sub("TH-27", "Sa Kaeo"),
    sub("TH-30", "Nakhon Ratchasima"),
    sub("TH-31", "Buri Ram"),
    sub("TH-32", "Surin"),
    sub("TH-33", "Si Sa Ket"),
    sub("TH-34", "Ubon Ratchathani"),
    sub("TH-35", "Yasothon"),
    sub("TH-36", "Chaiyaphum"),
    sub("TH-37", "Amnat Charoen"),
    sub("TH-38", "Bueng Kan"),
    sub("TH-39", "Nong Bua Lam Phu"),
    sub("TH-40", "Khon Kaen"),
    sub("TH-41", "Udon Thani"),
    sub("TH-42", "Loei"),
    sub("TH-43", "Nong Khai"),
    sub("TH-44", "Maha Sarakham"),
    sub("TH-45", "Roi Et"),
    sub("TH-46", "Kalasin"),
    sub("TH-47", "Sakon Nakhon"),
    sub("TH-48", "Nakhon Phanom"),
    sub("TH-49", "Mukdahan"),
    sub("TH-50", "Chiang Mai"),
    sub("TH-51", "Lamphun"),
    sub("TH-52", "Lampang"),
    sub("TH-53", "Uttaradit"),
    sub("TH-54", "Phrae"),
    sub("TH-55", "Nan"),
    sub("TH-56", "Phayao"),
    sub("TH-57", "Chiang Rai"),
    sub("TH-58", "Mae Hong Son"),
    sub("TH-60", "Nakhon Sawan"),
    sub("TH-61", "Uthai Thani"),
    sub("TH-62", "Kamphaeng Phet"),
    sub("TH-63", "Tak"),
    sub("TH-64", "Sukhothai"),
    sub("TH-65", "Phitsanulok"),
    sub("TH-66", "Phichit"),
    sub("TH-67", "Phetchabun"),
    sub("TH-70", "Ratchaburi"),
    sub("TH-71", "Kanchanaburi"),
    sub("TH-72", "Suphan Buri"),
    sub("TH-73", "Nakhon Pathom"),
    sub("TH-74", "Samut Sakhon"),
    sub("TH-75", "Samut Songkhram"),
    sub("TH-76", "Phetchaburi"),
    sub("TH-77", "Prachuap Khiri Khan"),
    sub("TH-80", "Nakhon Si Thammarat"),
    sub("TH-81", "Krabi"),
    sub("TH-82", "Phangnga"),
    sub("TH-83", "Phuket"),
    sub("TH-84", "Surat Thani"),
    sub("TH-85", "Ranong"),
    sub("TH-86", "Chumphon"),
    sub("TH-90", "Songkhla"),
    sub("TH-91", "Satun"),
    sub("TH-92", "Trang"),
    sub("TH-93", "Phatthalung"),
    sub("TH-94", "Pattani"),
    sub("TH-95", "Yala"),
    sub("TH-96", "Narathiwat"),
    sub("TH-S", "Phatthaya"),
    // Tajikistan
    sub("TJ-DU", "Dushanbe"),
    sub("TJ-GB", "Kŭhistoni Badakhshon"),
    sub("TJ-KT", "Khatlon"),
    sub("TJ-RA", "nohiyahoi tobei jumhurí"),
    sub("TJ-SU", "Sughd"),
    // Timor-Leste
    sub("TL-AL", "Aileu"),
    sub("TL-AN", "Ainaro"),
    sub("TL-BA", "Baucau"),
    sub("TL-BO", "Bobonaro"),
    sub("TL-CO", "Cova Lima"),
    sub("TL-DI", "Díli"),
    sub("TL-ER", "Ermera"),
    sub("TL-LA", "Lautein"),
    sub("TL-LI", "Likisá"),
    sub("TL-MF", "Manufahi"),
    sub("TL-MT", "Manatuto"),
    sub("TL-OE", "Oekusi-Ambenu"),
    sub("TL-VI", "Vikeke"),
    // Turkmenistan
    sub("TM-A", "Ahal"),
    sub("TM-B", "Balkan"),
    sub("TM-D", "Daşoguz"),
    sub("TM-L", "Lebap"),
    sub("TM-M", "Mary"),
    sub("TM-S", "Aşgabat"),
    // Tunisia
    sub("TN-11", "Tunis"),
    sub("TN-12", "L'Ariana"),
    sub("TN-13", "Ben Arous"),
    sub("TN-14", "La Manouba"),
    sub("TN-21", "Nabeul"),
    sub("TN-22", "Zaghouan"),
    sub("TN-23", "Bizerte"),
    sub("TN-31", "Béja"),
    sub("TN-32", "Jendouba"),
    sub("TN-33", "Le Kef"),
    sub("TN-34", "Siliana"),
    sub("TN-41", "Kairouan"),
    sub("TN-42", "Kasserine"),
    sub("TN-43", "Sidi Bouzid"),
    sub("TN-51", "Sousse"),
    sub("TN-52", "Monastir"),
    sub("TN-53", "Mahdia"),
    sub("TN-61", "Sfax"),
    sub("TN-71", "Gafsa"),
    sub("TN-72", "Tozeur"),
    sub("TN-73", "Kébili"),
    sub("TN-81", "Gabès"),
    sub("TN-82", "Médenine"),
    sub("TN-83", "Tataouine"),
    // Tonga
    sub("TO-01", "'Eua"),
    sub("TO-02", "Ha'apai"),
    sub("TO-03", "Niuas"),
    sub("TO-04", "Tongatapu"),
    sub("TO-05", "Vava'u"),
    // Türkiye
    sub("TR-01", "Adana"),
    sub("TR-02", "Adıyaman"),
    sub("TR-03", "Afyonkarahisar"),
    sub("TR-04", "Ağrı"),
    sub("TR-05", "Amasya"),
    sub("TR-06", "Ankara"),
    sub("TR-07", "Antalya"),
    sub("TR-08", "Artvin"),
    sub("TR-09", "Aydın"),
    sub("TR-10", "Balıkesir"),
    sub("TR-11", "Bilecik"),
    sub("TR-12", "Bingöl"),
    sub("TR-13", "Bitlis"),
    sub("TR-14", "Bolu"),
    sub("TR-15", "Burdur"),
    sub("TR-16", "Bursa"),
    sub("TR-17", "Çanakkale"),
    sub("TR-18", "Çankırı"),
    sub("TR-19", "Çorum"),
    sub("TR-20", "Denizli"),
    sub("TR-21", "Diyarbakır"),
    sub("TR-22", "Edirne"),
    sub("TR-23", "Elazığ"),
    sub("TR-24", "Erzincan"),
    sub("TR-25", "Erzurum"),
    sub("TR-26", "Eskişehir"),
    sub("TR-27", "Gaziantep"),
    sub("TR-28", "Giresun"),
    sub("TR-29", "Gümüşhane"),
    sub("TR-30", "Hakkâri"),
    sub("TR-31", "Hatay"),
    sub("TR-32", "Isparta"),
    sub("TR-33", "Mersin"),
    sub("TR-34", "İstanbul"),
    sub("TR-35", "İzmir"),
    sub("TR-36", "Kars"),
    sub("TR-37", "Kastamonu"),
    sub("TR-38", "Kayseri"),
    sub("TR-39", "Kırklareli"),
    sub("TR-40", "Kırşehir"),
    sub("TR-41", "Kocaeli"),
    sub("TR-42", "Konya"),
    sub("TR-43", "Kütahya"),
    sub("TR-44", "Malatya"),
    sub("TR-45", "Manisa"),
    sub("TR-46", "Kahramanmaraş"),
    sub("TR-47", "Mardin"),
    sub("TR-48", "Muğla"),
    sub("TR-49", "Muş"),
    sub("TR-50", "Nevşehir"),
    sub("TR-51", "Niğde"),
    sub("TR-52", "Ordu"),
    sub("TR-53", "Rize"),
    sub("TR-54", "Sakarya"),
    sub("TR-55", "Samsun"),
    sub("TR-56", "Siirt"),
    sub("TR-57", "Sinop"),
    sub("TR-58", "Sivas"),
    sub("TR-59", "Tekirdağ"),
    sub("TR-60", "Tokat"),
    sub("TR-61", "Trabzon"),
    sub("TR-62", "Tunceli"),
    sub("TR-63", "Şanlıurfa"),
    sub("TR-64", "Uşak"),
    sub("TR-65", "Van"),
    sub("TR-66", "Yozgat"),
    sub("TR-67", "Zonguldak"),
    sub("TR-68", "Aksaray"),
    sub("TR-69", "Bayburt"),
    sub("TR-70", "Karaman"),
    sub("TR-71", "Kırıkkale"),
    sub("TR-72", "Batman"),
    sub("TR-73", "Şırnak"),
    sub("TR-74", "Bartın"),
    sub("TR-75", "Ardahan"),
    sub("TR-76", "Iğdır"),
    sub("TR-77", "Yalova"),
    sub("TR-78", "Karabük"),
    sub("TR-79", "Kilis"),
    sub("TR-80", "Osmaniye"),
    sub("TR-81", "Düzce"),
    // Trinidad and Tobago
    sub("TT-ARI", "Arima"),
    sub("TT-CHA", "Chaguanas"),
    sub("TT-CTT", "Couva-Tabaquite-Talparo"),
    sub("TT-DMN", "Diego Martin"),
    sub("TT-MRC", "Mayaro-Rio Claro"),
    sub("TT-PED", "Penal-Debe"),
    sub("TT-POS", "Port of Spain"),
    sub("TT-PRT", "Princes Town"),
    sub("TT-PTF", "Point Fortin"),
    sub("TT-SFO", "San Fernando"),
    sub("TT-SGE", "Sangre Grande"),
    sub("TT-SIP", "Siparia"),
    sub("TT-SJL", "San Juan-Laventille"),
    sub("TT-TOB", "Tobago"),
    sub("TT-TUP", "Tunapuna-Piarco"),
    // Tuvalu
    sub("TV-FUN", "Funafuti"),
    sub("TV-NIT", "Niutao"),
    sub("TV-NKF", "Nukufetau"),
    sub("TV-NKL", "Nukulaelae"),
    sub("TV-NMA", "Nanumea"),
    sub("TV-NMG", "Nanumaga"),
    sub("TV-NUI", "Nui"),
    sub("TV-VAI", "Vaitupu"),
    // Taiwan, Province of China
    sub("TW-CHA", "Changhua"),
    sub("TW-CYI", "Chiayi"),
    sub("TW-CYQ", "Chiayi"),
    sub("TW-HSQ", "Hsinchu"),
    sub("TW-HSZ", "Hsinchu"),
    sub("TW-HUA", "Hualien"),
    sub("TW-ILA", "Yilan"),
    sub("TW-KEE", "Keelung"),
    sub("TW-KHH", "Kaohsiung"),
    sub("TW-KIN", "Kinmen"),
    sub("TW-LIE", "Lienchiang"),
    sub("TW-MIA", "Miaoli"),
    sub("TW-NAN", "Nantou"),
    sub("TW-NWT", "New Taipei"),
    sub("TW-PEN", "Penghu"),
    sub("TW-PIF", "Pingtung"),
    sub("TW-TAO", "Taoyuan"),
    sub("TW-TNN", "Tainan"),
    sub("TW-TPE", "Taipei"),
    sub("TW-TTT", "Taitung"),
    sub("TW-TXG", "Taichung"),
    sub("TW-YUN", "Yunlin"),
    // Tanzania, United Republic of
    sub("TZ-01", "Arusha"),
    sub("TZ-02", "Dar es Salaam"),
    sub("TZ-03", "Dodoma"),
    sub("TZ-04", "Iringa"),
    sub("TZ-05", "Kagera"),
    sub("TZ-06", "Pemba North"),
    sub("TZ-07", "Zanzibar North"),
    sub("TZ-08", "Kigoma"),
    sub("TZ-09", "Kilimanjaro"),
    sub("TZ-10", "Pemba South"),
    sub("TZ-11", "Zanzibar South"),
    sub("TZ-12", "Lindi"),
    sub("TZ-13", "Mara"),
    sub("TZ-14", "Mbeya"),
    sub("TZ-15", "Zanzibar West"),
    sub("TZ-16", "Morogoro"),
    sub("TZ-17", "Mtwara"),
    sub("TZ-18", "Mwanza"),
    sub("TZ-19", "Coast"),
    sub("TZ-20", "Rukwa"),
    sub("TZ-21", "Ruvuma"),
    sub("TZ-22", "Shinyanga"),
    sub("TZ-23", "Singida"),
    sub("TZ-24", "Tabora"),
    sub("TZ-25", "Tanga"),
    sub("TZ-26", "Manyara"),
    sub("TZ-27", "Geita"),
    sub("TZ-28", "Katavi"),
    sub("TZ-29", "Njombe"),
    sub("TZ-30", "Simiyu"),
    sub("TZ-31", "Songwe"),
    // Ukraine
    sub("UA-05", "Vinnytska oblast"),
    sub("UA-07", "Volynska oblast"),
    sub("UA-09", "Luhanska oblast"),
    sub("UA-12", "Dnipropetrovska oblast"),
    sub("UA-14", "Donetska oblast"),
    sub("UA-18", "Zhytomyrska oblast"),
    sub("UA-21", "Zakarpatska oblast"),
    sub("UA-23", "Zaporizka oblast"),
    sub("UA-26", "Ivano-Frankivska oblast"),
    sub("UA-30", "Kyiv"),
    sub("UA-32", "Kyivska oblast"),
    sub("UA-35", "Kirovohradska oblast"),
    sub("UA-40", "Sevastopol"),
    sub("UA-43", "Avtonomna Respublika Krym"),
    sub("UA-46", "Lvivska oblast"),
    sub("UA-48", "Mykolaivska oblast"),
    sub("UA-51", "Odeska oblast"),
    sub("UA-53", "Poltavska oblast"),
    sub("UA-56", "Rivnenska oblast"),
    sub("UA-59", "Sumska oblast"),
    sub("UA-61", "Ternopilska oblast"),
    sub("UA-63", "Kharkivska oblast"),
    sub("UA-65", "Khersonska oblast"),
    sub("UA-68", "Khmelnytska oblast"),
    sub("UA-71", "Cherkaska oblast"),
    sub("UA-74", "Chernihivska oblast"),
    sub("UA-77", "Chernivetska oblast"),
    // Uganda
    sub("UG-101", "Kalangala"),
    sub("UG-102", "Kampala"),
    sub("UG-103", "Kiboga"),
    sub("UG-104", "Luwero"),
    sub("UG-105", "Masaka"),
    sub("UG-106", "Mpigi"),
    sub("UG-107", "Mubende"),
    sub("UG-108", "Mukono"),
    sub("UG-109", "Nakasongola"),
    sub("UG-110", "Rakai"),
    sub("UG-111", "Sembabule"),
    sub("UG-112", "Kayunga"),
    sub("UG-113", "Wakiso"),
    sub("UG-114", "Lyantonde"),
    sub("UG-115", "Mityana"),
    sub("UG-116", "Nakaseke"),
    sub("UG-117", "Buikwe"),
    sub("UG-118", "Bukomansibi"),
    sub("UG-119", "Butambala"),
    sub("UG-120", "Buvuma"),
    sub("UG-121", "Gomba"),
    sub("UG-122", "Kalungu"),
    sub("UG-123", "Kyankwanzi"),
    sub("UG-124", "Lwengo"),
    sub("UG-125", "Kyotera"),
    sub("UG-126", "Kasanda"),
    sub("UG-201", "Bugiri"),
    sub("UG-202", "Busia"),
    sub("UG-203", "Iganga"),
    sub("UG-204", "Jinja"),
    sub("UG-205", "Kamuli"),
    sub("UG-206", "Kapchorwa"),
    sub("UG-207", "Katakwi"),
    sub("UG-208", "Kumi"),
    sub("UG-209", "Mbale"),
    sub("UG-210", "Pallisa"),
    sub("UG-211", "Soroti"),
    sub("UG-212", "Tororo"),
    sub("UG-213", "Kaberamaido"),
    sub("UG-214", "Mayuge"),
    sub("UG-215", "Sironko"),
    sub("UG-216", "Amuria"),
    sub("UG-217", "Budaka"),
    sub("UG-218", "Bududa"),
    sub("UG-219", "Bukedea"),
    sub("UG-220", "Bukwo"),
    sub("UG-221", "Butaleja"),
    sub("UG-222", "Kaliro"),
    sub("UG-223", "Manafwa"),
    sub("UG-224", "Namutumba"),
    sub("UG-225", "Bulambuli"),
    sub("UG-226", "Buyende"),
    sub("UG-227", "Kibuku"),
    sub("UG-228", "Kween"),
    sub("UG-229", "Luuka"),
    sub("UG-230", "Namayingo"),
    sub("UG-231", "Ngora"),
    sub("UG-232", "Serere"),
    sub("UG-233", "Butebo"),
    sub("UG-234", "Namisindwa"),
    sub("UG-235", "Bugweri"),
    sub("UG-236", "Kapelebyong"),
    sub("UG-237", "Kalaki"),
    sub("UG-301", "Adjumani"),
    sub("UG-302", "Apac"),
    sub("UG-303", "Arua"),
    sub("UG-304", "Gulu"),
    sub("UG-305", "Kitgum"),
    sub("UG-306", "Kotido"),
    sub("UG-307", "Lira"),
    sub("UG-308", "Moroto"),
    sub("UG-309", "Moyo"),
    sub("UG-310", "Nebbi"),
    sub("UG-311", "Nakapiripirit"),
    sub("UG-312", "Pader"),
    sub("UG-313", "Yumbe"),
    sub("UG-314", "Abim"),
    sub("UG-315", "Amolatar"),
    sub("UG-316", "Amuru"),
    sub("UG-317", "Dokolo"),
    sub("UG-318", "Kaabong"),
    sub("UG-319", "Koboko"),
    sub("UG-320", "Maracha"),
    sub("UG-321", "Oyam"),
    sub("UG-322", "Agago"),
    sub("UG-323", "Alebtong"),
    sub("UG-324", "Amudat"),
    sub("UG-325", "Kole"),
    sub("UG-326", "Lamwo"),
    sub("UG-327", "Napak"),
    sub("UG-328", "Nwoya"),
    sub("UG-329", "Otuke"),
    sub("UG-330", "Zombo"),
    sub("UG-331", "Omoro"),
    sub("UG-332", "Pakwach"),
    sub("UG-333", "Kwania"),
    sub("UG-334", "Nabilatuk"),
    sub("UG-335", "Karenga"),
    sub("UG-336", "Madi-Okollo"),
    sub("UG-337", "Obongi"),
    sub("UG-401", "Bundibugyo"),
    sub("UG-402", "Bushenyi"),
    sub("UG-403", "Hoima"),
    sub("UG-404", "Kabale"),
    sub("UG-405", "Kabarole"),
    sub("UG-406", "Kasese"),
    sub("UG-407", "Kibaale"),
    sub("UG-408", "Kisoro"),
    sub("UG-409", "Masindi"),
    sub("UG-410", "Mbarara"),
    sub("UG-411", "Ntungamo"),
    sub("UG-412", "Rukungiri"),
    sub("UG-413", "Kamwenge"),
    sub("UG-414", "Kanungu"),
    sub("UG-415", "Kyenjojo"),
    sub("UG-416", "Buliisa"),
    sub("UG-417", "Ibanda"),
    sub("UG-418", "Isingiro"),
    sub("UG-419", "Kiruhura"),
    sub("UG-420", "Buhweju"),
    sub("UG-421", "Kiryandongo"),
    sub("UG-422", "Kyegegwa"),
    sub("UG-423", "Mitooma"),
    sub("UG-424", "Ntoroko"),
    sub("UG-425", "Rubirizi"),
    sub("UG-426", "Sheema"),
    sub("UG-427", "Kagadi"),
    sub("UG-428", "Kakumiro"),
    sub("UG-429", "Rubanda"),
    sub("UG-430", "Bunyangabu"),
    sub("UG-431", "Rukiga"),
    sub("UG-432", "Kikuube"),
    sub("UG-433", "Kazo"),
    sub("UG-434", "Kitagwenda"),
    sub("UG-435", "Rwampara"),
    sub("UG-C", "Central"),
    sub("UG-E", "Eastern"),
    sub("UG-N", "Northern"),
    sub("UG-W", "Western"),
    // United States Minor Outlying Islands
    sub("UM-67", "Johnston Atoll"),
    sub("UM-71", "Midway Islands"),
    sub("UM-76", "Navassa Island"),
    sub("UM-79", "Wake Island"),
    sub("UM-81", "Baker Island"),
    sub("UM-84", "Howland Island"),
    sub("UM-86", "Jarvis Island"),
    sub("UM-89", "Kingman Reef"),
    sub("UM-95", "Palmyra Atoll"),
    // United States
    sub("US-AK", "Alaska"),
    sub("US-AL", "Alabama"),
    sub("US-AR", "Arkansas"),
    sub("US-AS", "American Samoa"),
    sub("US-AZ", "Arizona"),
    sub("US-CA", "California"),
    sub("US-CO", "Colorado"),
    sub("US-CT", "Connecticut"),
    sub("US-DC", "District of Columbia"),
    sub("US-DE", "Delaware"),
    sub("US-FL", "Florida"),
    sub("US-GA", "Georgia"),
    sub("US-GU", "Guam"),
    sub("US-HI", "Hawaii"),
    sub("US-IA", "Iowa"),
    sub("US-ID", "Idaho"),
    sub("US-IL", "Illinois"),
    sub("US-IN", "Indiana"),
    sub("US-KS", "Kansas"),
    sub("US-KY", "Kentucky"),
    sub("US-LA", "Louisiana"),
    sub("US-MA", "Massachusetts"),
    sub("US-MD", "Maryland"),
    sub("US-ME", "Maine"),
    sub("US-MI", "Michigan"),
    sub("US-MN", "Minnesota"),
    sub("US-MO", "Missouri"),
    sub("US-MP", "Northern Mariana Islands"),
    sub("US-MS", "Mississippi"),
    sub("US-MT", "Montana"),
    sub("US-NC", "North Carolina"),
    sub("US-ND", "North Dakota"),
    sub("US-NE", "Nebraska"),
    sub("US-NH", "New Hampshire"),
    sub("US-NJ", "New Jersey"),
    sub("US-NM", "New Mexico"),
    sub("US-NV", "Nevada"),
    sub("US-NY", "New York"),
    sub("US-OH", "Ohio"),
    sub("US-OK", "Oklahoma"),
    sub("US-OR", "Oregon"),
    sub("US-PA", "Pennsylvania"),
    sub("US-PR", "Puerto Rico"),
    sub("US-RI", "Rhode Island"),
    sub("US-SC", "South Carolina"),
    sub("US-SD", "South Dakota"),
    sub("US-TN", "Tennessee"),
    sub("US-TX", "Texas"),
    sub("US-UM", "United States Minor Outlying Islands"),
    sub("US-UT", "Utah"),
    sub("US-VA", "Virginia"),
    sub("US-VI", "Virgin Islands, U.S."),
    sub("US-VT", "Vermont"),
    sub("US-WA", "Washington"),
    sub("US-WI", "Wisconsin"),
    sub("US-WV", "West Virginia"),
    sub("US-WY", "Wyoming"),
    // Uruguay
    sub("UY-AR", "Artigas"),
    sub("UY-CA", "Canelones"),
    sub("UY-CL", "Cerro Largo"),
    sub("UY-CO", "Colonia"),
    sub("UY-DU", "Durazno"),
    sub("UY-FD", "Florida"),
    sub("UY-FS", "Flores"),
    sub("UY-LA", "Lavalleja"),
    sub("UY-MA", "Maldonado"),
    sub("UY-MO", "Montevideo"),
    sub("UY-PA", "Paysandú"),
    sub("UY-RN", "Río Negro"),
    sub("UY-RO", "Rocha"),
    sub("UY-RV", "Rivera"),
    sub("UY-SA", "Salto"),
    sub("UY-SJ", "San José"),
    sub("UY-SO", "Soriano"),
    sub("UY-TA", "Tacuarembó"),
    sub("UY-TT", "Treinta y Tres"),
    // Uzbekistan
    sub("UZ-AN", "Andijon"),
    sub("UZ-BU", "Buxoro"),
    sub("UZ-FA", "Farg‘ona"),
    sub("UZ-JI", "Jizzax"),
    sub("UZ-NG", "Namangan"),
    sub("UZ-NW", "Navoiy"),
    sub("UZ-QA", "Qashqadaryo"),
    sub("UZ-QR", "Qoraqalpog‘iston Respublikasi"),
    sub("UZ-SA", "Samarqand"),
    sub("UZ-SI", "Sirdaryo"),
    sub("UZ-SU", "Surxondaryo"),
    sub("UZ-TK", "Toshkent"),
    sub("UZ-TO", "Toshkent"),
    sub("UZ-XO", "Xorazm"),
    // Saint Vincent and the Grenadines
    sub("VC-01", "Charlotte"),
    sub("VC-02", "Saint Andrew"),
    sub("VC-03", "Saint David"),
    sub("VC-04", "Saint George"),
    sub("VC-05", "Saint Patrick"),
    sub("VC-06", "Grenadines"),
    // Venezuela, Bolivarian Republic of
    sub("VE-A", "Distrito Capital"),
    sub("VE-B", "Anzoátegui"),
    sub("VE-C", "Apure"),
    sub("VE-D", "Aragua"),
    sub("VE-E", "Barinas"),
    sub("VE-F", "Bolívar"),
    sub("VE-G", "Carabobo"),
    sub("VE-H", "Cojedes"),
    sub("VE-I", "Falcón"),
    sub("VE-J", "Guárico"),
    sub("VE-K", "Lara"),
    sub("VE-L", "Mérida"),
    sub("VE-M", "Miranda"),
    sub("VE-N", "Monagas"),
    sub("VE-O", "Nueva Esparta"),
    sub("VE-P", "Portuguesa"),
    sub("VE-R", "Sucre"),
    sub("VE-S", "Táchira"),
    sub("VE-T", "Trujillo"),
    sub("VE-U", "Yaracuy"),
    sub("VE-V", "Zulia"),
    sub("VE-W", "Dependencias Federales"),
    sub("VE-X", "La Guaira"),
    sub("VE-Y", "Delta Amacuro"),
    sub("VE-Z", "Amazonas"),
    // Viet Nam
    sub("VN-01", "Lai Châu"),
    sub("VN-02", "Lào Cai"),
    sub("VN-03", "Hà Giang"),
    sub("VN-04", "Cao Bằng"),
    sub("VN-05", "Sơn La"),
    sub("VN-06", "Yên Bái"),
    sub("VN-07", "Tuyên Quang"),
    sub("VN-09", "Lạng Sơn"),
    sub("VN-13", "Quảng Ninh"),
    sub("VN-14", "Hòa Bình"),
    sub("VN-18", "Ninh Bình"),
    sub("VN-20", "Thái Bình"),
    sub("VN-21", "Thanh Hóa"),
    sub("VN-22", "Nghệ An"),
    sub("VN-23", "Hà Tĩnh"),
    sub("VN-24", "Quảng Bình"),
    sub("VN-25", "Quảng Trị"),
    sub("VN-26", "Thừa Thiên-Huế"),
    sub("VN-27", "Quảng Nam"),
    sub("VN-28", "Kon Tum"),
    sub("VN-29", "Quảng Ngãi"),
    sub("VN-30", "Gia Lai"),
    sub("VN-31", "Bình Định"),
    sub("VN-32", "Phú Yên"),
    sub("VN-33", "Đắk Lắk"),
    sub("VN-34", "Khánh Hòa"),
    sub("VN-35", "Lâm Đồng"),
    sub("VN-36", "Ninh Thuận"),
    sub("VN-37", "Tây Ninh"),
    sub("VN-39", "Đồng Nai"),
    sub("VN-40", "Bình Thuận"),
    sub("VN-41", "Long An"),
    sub("VN-43", "Bà Rịa - Vũng Tàu"),
    sub("VN-44", "An Giang"),
    sub("VN-45", "Đồng Tháp"),
    sub("VN-46", "Tiền Giang"),
    sub("VN-47", "Kiến Giang"),
    sub("VN-49", "Vĩnh Long"),
    sub("VN-50", "Bến Tre"),
    sub("VN-51", "Trà Vinh"),
    sub("VN-52", "Sóc Trăng"),
    sub("VN-53", "Bắc Kạn"),
    sub("VN-54", "Bắc Giang"),
    sub("VN-55", "Bạc Liêu"),
    sub("VN-56", "Bắc Ninh"),
    sub("VN-57", "Bình Dương"),
    sub("VN-58", "Bình Phước"),
    sub("VN-59", "Cà Mau"),
    sub("VN-61", "Hải Dương"),
    sub("VN-63", "Hà Nam"),
    sub("VN-66", "Hưng Yên"),
    sub("VN-67", "Nam Định"),
    sub("VN-68", "Phú Thọ"),
    sub("VN-69", "Thái Nguyên"),
    sub("VN-70", "Vĩnh Phúc"),
    sub("VN-71", "Điện Biên"),
    sub("VN-72", "Đắk Nông"),
    sub("VN-73", "Hậu Giang"),
    sub("VN-CT", "Cần Thơ"),
    sub("VN-DN", "Đà Nẵng"),
    sub("VN-HN", "Hà Nội"),
    sub("VN-HP", "Hải Phòng"),
    sub("VN-SG", "Hồ Chí Minh"),
    // Vanuatu
    sub("VU-MAP", "Malampa"),
    sub("VU-PAM", "Pénama"),
    sub("VU-SAM", "Sanma"),
    sub("VU-SEE", "Shéfa"),
    sub("VU-TAE", "Taféa"),
    sub("VU-TOB", "Torba"),
    // Wallis and Futuna
    sub("WF-AL", "Alo"),
    sub("WF-SG", "Sigave"),
    sub("WF-UV", "Uvea"),
    // Samoa
    sub("WS-AA", "A'ana"),
    sub("WS-AL", "Aiga-i-le-Tai"),
    sub("WS-AT", "Atua"),
    sub("WS-FA", "Fa'asaleleaga"),
    sub("WS-GE", "Gaga'emauga"),
    sub("WS-GI", "Gagaifomauga"),
    sub("WS-PA", "Palauli"),
    sub("WS-SA", "Satupa'itea"),
    sub("WS-TU", "Tuamasaga"),
    sub("WS-VF", "Va'a-o-Fonoti"),
    sub("WS-VS", "Vaisigano"),
    // Yemen
    sub("YE-AB", "Abyan"),
    sub("YE-AD", "‘Adan"),
    sub("YE-AM", "‘Amrān"),
    sub("YE-BA", "Al Bayḑā’"),
    sub("YE-DA", "Aḑ Ḑāli‘"),
    sub("YE-DH", "Dhamār"),
    sub("YE-HD", "Ḩaḑramawt"),
    sub("YE-HJ", "Ḩajjah"),
    sub("YE-HU", "Al Ḩudaydah"),
    sub("YE-IB", "Ibb"),
    sub("YE-JA", "Al Jawf"),
    sub("YE-LA", "Laḩij"),
    sub("YE-MA", "Ma’rib"),
    sub("YE-MR", "Al Mahrah"),
    sub("YE-MW", "Al Maḩwīt"),
    sub("YE-RA", "Raymah"),
    sub("YE-SA", "Amānat al ‘Āşimah [city]"),
    sub("YE-SD", "Şāʻdah"),
    sub("YE-SH", "Shabwah"),
    sub("YE-SN", "Şanʻā’"),
    sub("YE-SU", "Arkhabīl Suquţrá"),
    sub("YE-TA", "Tāʻizz"),
    // South Africa
    sub("ZA-EC", "Eastern Cape"),
    sub("ZA-FS", "Free State"),
    sub("ZA-GP", "Gauteng"),
    sub("ZA-KZN", "Kwazulu-Natal"),
    sub("ZA-LP", "Limpopo"),
    sub("ZA-MP", "Mpumalanga"),
    sub("ZA-NC", "Northern Cape"),
    sub("ZA-NW", "North-West"),
    sub("ZA-WC", "Western Cape"),
    // Zambia
    sub("ZM-01", "Western"),
    sub("ZM-02", "Central"),
    sub("ZM-03", "Eastern"),
    sub("ZM-04", "Luapula"),
    sub("ZM-05", "Northern"),
    sub("ZM-06", "North-Western"),
    sub("ZM-07", "Southern"),
    sub("ZM-08", "Copperbelt"),
    sub("ZM-09", "Lusaka"),
    sub("ZM-10", "Muchinga"),
    // Zimbabwe
    sub("ZW-BU", "Bulawayo"),
    sub("ZW-HA", "Harare"),
    sub("ZW-MA", "Manicaland"),
    sub("ZW-MC", "Mashonaland Central"),
    sub("ZW-ME", "Mashonaland East"),
    sub("ZW-MI", "Midlands"),
    sub("ZW-MN", "Matabeleland North"),
    sub("ZW-MS", "Matabeleland South"),
    sub("ZW-MV", "Masvingo"),
    sub("ZW-MW", "Mashonaland West"),
];
