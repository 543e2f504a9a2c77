// SM3 digests of msg[..i] where msg[j] = j as u8.
pub(super) const TEST_VEC: [&str; 131] = [
    "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b",
    "2daef60e7a0b8f5e024c81cd2ab3109f2b4f155cf83adeb2ae5532f74a157fdf",
    "d8aabbef65e6196ae1106fddf48cdd0fd6eee7ff54cd678f209b4914426b0221",
    "d18c17ef9f985ba361f06b599a1ec3cae9bd5de6967cac33944e5f8b67b6dcc2",
    "4b41bc3558731767a4b19187a64f8d171878ef5a45bfd73670815c2c66387d75",
    "96eda336eb22ee830f1d1354ce363872497171a3eac3cdf1d251c88bd4d28d2f",
    "728ed1ff1c9ff55249889985cb21187d6e4f9516cc5cdba5f7cce79f5ff12df9",
    "f4afc6e2843c2b00de925b36259e386659bb727cfc528016f434e2d79ae46e7b",
    "6c79b88ee30d03cb22b842bfcc15a18f839f70eaadbd3bda953c6aa31092f83b",
    "d9260eb16f78e835ead5b02fca32321439faffc1763507df21b3848eead70e73",
    "24c898bdb4d258f9bebb2e820d4ed478a7c013b37bd9e5006515730c18a70416",
    "25982abcaf86a30979cfbd4f86c76f2a3160f916ca0301a55c1b48db89c8d7c5",
    "b1a7b180ffd9147fa043acfe6c794e902656c502b4f241b01f9de1229562205b",
    "65721525fca963bfb01d5250a032ad3fc15f5d3b1e591906e892f8abd4499a5e",
    "386d2b4dcb208db57b938c345338bdbec61547eed302ecd273992a64876155d7",
    "c706e492b6994b610a4b62aba68e797772ab5dc2764ec35980dba24734ca2eb1",
    "f65c16e869f79670dee45f4b56fe2b3e0308d8fefc3214e16c64b7f5d3741e89",
    "431f00611d6edcbaeb4c53c8f94148478a894e34383984f6d3bc45d144ef1b1c",
    "fe4c9ff5def43dd8a6e1eed798ae1515871baf70fde50a7f9aa3391c53604ff3",
    "674ed992c21a2842673af768eb51374790252097ca545f426af6f898865ba903",
    "54001a49b4cd4275a032a257405ff7cb0cb8b396dd9d8d4d387f4a5840ee0c13",
    "6c9206fb7d349ac74d44352a4f5203f800af34c1aea8f1cf8c6ac491317dd1b5",
    "6a4c8e752f5d4b4774fc5ce600260b727def2850a2d4bc470e63e6e728de9d7b",
    "a4f9221ff5e44e68cfa1576cf37a57bc7eaa1fc365beac7d369c414770dc3fbe",
    "d5cd0c791215bb022b7a07fe60a947ab436a4ec1cbc29ca60824a57cc6074ce1",
    "52be7fd40c801c55380473d80ae191b273bb90f4750180f12c84b92f0378e102",
    "1b3f4246b2ad89af381fad9d993bab24ccac205576594d292489836f45e7038d",
    "41903c7b3ea1f3f63fe734f54998682c97723336af661dc988919ff7c0d8ecf0",
    "b268af3a3971754c8df859c6a91bfde7929cae0c4f4cb08826990f02574d7e95",
    "137e134dcaf4348c629347db5626dc85fec2a9312b6b379cd2acef43d073983b",
    "65333197b21cde07f4a452656ce2ef447cac4eb56ae0f25fa9ab1551a52a2e58",
    "182c11ff061a611473bb2357fb422edec582c80837cb0a838b43761e81e528cf",
    "fa34635f1d3ac2729ac5987eb59e01928457f325b4b51ca85a177813c5c5ddf7",
    "d2d8fe4545da9cd3afd31d31425fa2b3cde043c6b40db542b81683c20303cd21",
    "09276af3f77a8f06f9a3f84dd05defe5704f4b4a51fa27cb9ec162085037ae33",
    "36d1655c6f37ff56626234e8934b8922a66b978c78adcad8234d6a66c201f29d",
    "3ce6e59bcb3b3ee8581e34ea5a92cd5c5d03c877a54ed9c8ceff188125fc765d",
    "2ff022cec2f8d6c474c86237e747983d0833eb65a435925fce17e780e4d83404",
    "cf021c2a028f8101ab8173e35dee507f5be2fb2f133bebf4ac6f1a3c420986f9",
    "51c501b8f6f85b3c36b630171f857e58622dad1cafe296d2371187f24d307a7e",
    "9d96c19358bbc611b74b1844a69e12931884879cc2267245fe940b11662f905e",
    "42248eeaa80c20c2181d982e2c612c422a483866be662766b754d4090d19bbad",
    "c1efbede74c4ff558dd39c550ad0c078cd42d10b5183ca4cf626b1c8a7504802",
    "5474cd859a1ce6b80b04f40ade7e010bd26aeed4be01978dced46445fee8f93d",
    "7e20b15a795d8278c911c8e8fefc2a4dcf57bde011dd9ad9f32a0fe758a829f3",
    "e36dcbac4c65f93d23f83ffa5f9fa8f6f542f96dc957a2952ff50c1836c7e1d7",
    "791e088d7d0a769e47ca3cfbc99723c549078e389d687d0e9a4f13ec6ba5457c",
    "e14485a2627415801fedbcc1c34a6c3312940126ef62a90d94bbbe5e694ca89d",
    "7ec11f122fa8d8858b6d4296b25e941d2c2fbd1e583d47b7ea24cfc9e4035a9a",
    "8e13771e93c4181f1970bd92b9f8e349eb9c69f780d8e1bb0409b092f0122937",
    "f24cef726525070d3b44ea309a6a03396b22f6c48f0dddd99539ac4dc62ce4ec",
    "9731c326383bdd50e2ac8be14e8b04418cecb904502f888658ec3ab27c44d926",
    "4bfef43cd2aa9bd40275de4dd7e6e41cfc9090d2c5ebe1c96d00f336e287a925",
    "2a5fd61773794fd7c959ffb29256c1c9a9c028ca1e4f1f2f5224c002b766989a",
    "1bb1b592239447b5de0395d94159996ea7cc4fcc7b9f66ccc5f0cfdc89586782",
    "a79cf9dcee3404abf7f769698201647fd9d3ff61d629d0f58bb4b5579a427db8",
    "62f7363b15f4de76dd925c493b9d6d00d4ba0ef2a1f334c1d0f13b293aeb40d1",
    "441f67cc31781dd2986fc612b92dfade871d81357f2487f5c86d94a8c6778d82",
    "b4242d2bde6758049d6bf3ac979cfbfa8590c8f9a964baa53f4de3529e958ce8",
    "fe83ebd916fa2efe514556d3f3410d5c571d26b97722517d182626d1e8d67d65",
    "f886e1c50d032c1b893a53200f5d2c0dbc9b486cb0eea56fbbb63a35bead01b0",
    "cf232d81e9c18d7cabd90eebd871c81a69bdf378ac06e49c2e8eff969b75b670",
    "84932baebba0ff9e1506788e6cfefe7e6fa6b2e7132242b91417e1c5db4f7706",
    "6165e4cbb15cde01c6226e0015a47f710f8f8e1f2c296700033bb34d9212109c",
    "93566f236d157aae078d1ddb5cebdbba1520b5142e22a8915564345ba2ae1d63",
    "c886e6814be748285a10b28ae62ddacd85db830cd2cf3a2bfa2f729c15f63618",
    "e844f6e566c8e40ca5e650b938c4ea3c1ebb3f16a714f51f3303a089c09f9e62",
    "cfd56a9cd3ab872b2e3893011341330b921513790c938bf09603f6da2ec0520c",
    "879e8707eb2f72c8fae188f026486b3f0864b5ec43b7968fc516d3db91ad72e5",
    "da5887c018000edcf53d3e1e0b300fdb6619130a9d99eb5b80170d3308bf1036",
    "5ea935c5bc7a7d1f0a05865d059f9de99d9c21cacaee6335d896c386f2380f1a",
    "c4424cf106704451159fbf8ab1b69c0dca84fbff9d186702fda7a99d1fd2dc77",
    "c10b8c332565ab5a91c09bbb6e6e0187824cc5aee0a2f9c607da3b6de15f9456",
    "807624e5cb1bc14f514c9f7c4ff1235d02b4fb9c8ceece3458b20dacadd9be0e",
    "c2b0aeeb41eedfb383d1137f6c84d0331254ecaa1e1108e7d6c3f19bc28aa90c",
    "b5c1a6629434d8e47f192c10b79562d390cb91754755afff4dd6824aa9ecda63",
    "c6d12158451a0c2b14ddf34d2a512065f338d8b57ea821591b67c6a7d1f9bc5e",
    "0311b0ce52bc5dbe8c837ea76d6d6259c2f4fcdc6c7bd2e16d78b67ab4149b8f",
    "470739a11c5c5eb5860a0450aeb696afc7ebf24dd95dc555e99b279fdd88b06f",
    "7f57ad909ef4f62d7e762bbe1c9c3f18c4ccaf37805995ce86fabb7c762d1ff6",
    "9a1198bad957f2e411297e1d17b627afb6c842437c0ade5879ea249021d1f0cd",
    "7fc44253fa19dde0a9fe8b116a0d01bf95a3077440c1a5d11b9614b6429df505",
    "f056ffb3833acd0379144757e9816953ab097191533dc8a57affd1d127b38c4a",
    "ccd3fa40cc2d2114a5e9b3325f6584a4df488e1b34ba3e2d1528327a36f352a9",
    "04203c3b8f1ffd61ff3d0134c6172d39c97b94b962b2ed7be70070f0996da57a",
    "157ca56db5039fb8bf536dadea456eed976ae7db54372ef71750852a1bf0542c",
    "910ba7725f46ee646c270c7e82c5cfd2c9066fc0d88fb2820ba963c26df1f465",
    "867441f91e3ca3e5ea5db6269b8e30baf5f6fd2bd56fb3fb715d4a8c7810cc71",
    "6701746addf00166c676cba3f6cec7be379119c00f11011537acd99bdb3ce0c7",
    "6d6e112eec5b237af3927a9a2abfe7e4669fc15c5ad379d072d32b1d255bdcfb",
    "986f414001210c8f32aa79dbe9ef3d7375e75c51271b7a04b366c67aae1e4c87",
    "4ae6b2e1f2461a55cf44d92390baa0492333a9f25645cbe1352cfbc5b42afa2b",
    "6a529a8e765e6988300f495e9b73a651c28e39892f0b31b4d5c43faeb06f3870",
    "2228c5374b0b93cbba4d4012362c6207ad2ff0cfa0da0c5fe5622772b1885976",
    "2dad3fa1d4856e95b67b261a5ebf6c5aff149c5a7bca25130940ca9e70cb6251",
    "6529643ce86e9faf589409403f6de23908fb91499c8ad09805aad6c7f3ec5751",
    "2edbd8866011f112124f30774e9ce85e3bea3c2ccf98fd8757046a2943da59b6",
    "2b987812d4479d2f095a5a22aae0b8a77a1bdecdebda16dcb987cf3974003e81",
    "95be171d4dc68dc32da1dd5a1a31808c0a324a8feaa4044f0cbe7304f4b3603e",
    "7d4eac94a68e328b800be8d9bb1772c268450b7a3c9959d0729f036cdb8b8bb6",
    "4b2833c158dd41614b76e37f18889243bd6b4a744e36de60920a2f89e409c64e",
    "b0992cb78be5cda48bf503de1d3b4ef88aefff54ee6cf8a2be14ca48bc400d55",
    "0cd08eaa77e6a6f48e1e4a9371c17ec66b5d3b27a28a00e93d633cb68097cc4e",
    "30821bf5c6770cb2071a04bc764ffc859ee9fd51149a0fbf6f45fcace6523d44",
    "67916a4f629b6ccc733edde300d316eb405bc04e7d381738456e2af39601dc70",
    "aac90fa00921904ef66d6bdf92dc29f478e1d394cc4e8ecc68f71882062380fa",
    "dbf54dc0b588c2de7dd9ff941868873d60222e77990c16ca2892b32b326effc6",
    "fe698ffcfaa632e75ea1b943889ed4d090e91e846afc78053c8b72d8019c56f8",
    "3faaca4e09e7667deaab83ecb6d430e9df80c0d1f69b05981da052d6a0bcd977",
    "32302db834a491d160aaf5c0a66ad90cfafeea5855e6d0283ba331b66777da46",
    "f3214c9cca8fa3682d22660a541625d55f2b3b7d7b56362a861d4a1c75056e36",
    "46ea8ff040518238fb6e34b688209bdcd18b31672c4ba28271045f8c8c312733",
    "1c7b0125f4f56aa3e7104b10b25ce1c98e7668720f9a9e2eb21b6de36bbc62e7",
    "2c828958c3f34a2587df239f258f52b3ecb599f67e96a4064da2d4fa1a955f2c",
    "cfdd1bef2646546bc6fee51b84ae9a056a1f3d3ff404f719c5ea889aad00594a",
    "a02a9afc0b47e0f4e79924cd3fd2a9e242664360172b61298486d0cc6a9583ca",
    "7708158049314afdeb7c9b23b18e27f556d480057aae126114167688b2d5ee0f",
    "8990e02f7553f6077d6da698ca76688e64f52ffc93a975085d2fd36d9541a2f9",
    "28470ffdec4f1c82e0a09f1d2a771dfb0d785f7119e401b6e5a42029dfc88c32",
    "8f3ea392a89a7119982d6634660db1a95f35d68267a2235e3255998a857f4fbf",
    "6babee35e6a1515af9d6255109c24f3c08897829422c6225d235fd4c8527e9ec",
    "501bf851d9377e2f02e6dc2da58795b5a7337d94efbea64bcbaf0b3df11e240c",
    "00825b1ab35f89279c4869826c159f5910cffde3ae20aab7bca13ec8263e12e5",
    "722d468220d61a129d766e589968b196e4136b39c4e83b5ca215050c4cc7107a",
    "76abe4f014c7caf037fc6b87529f8031dba51f55ba3c00c61c8aaad666c43098",
    "60434971512e75b7325472797c7b11bc4932ec6561050ebf8a38698bddc84b76",
    "07f7ba45d5551d5dbd3c3926619235a7ee880396d67a63398053da8e3376bcdb",
    "bca3436d828517a6a6893a9e309e06e7b7b29c6e3f78b4814b23efe149962980",
    "a9e7985473ca09df1510d83b572f72375430756c4a661b00724afeb8b75dd0a5",
    "2783a0e9b3767a694f90027806e392ae959d919baed7ceca40c7c8077711cb7b",
    "8fef2ba680d9a12fb9016c19c94cda76f087cccca05e7fe97c5cbcc53f9edd09",
];
